//! Line item model for the pricing engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One priced row (product or custom entry) on a quotation or invoice.
///
/// `effective_unit_price` and `line_total` are derived fields. Callers never
/// set them directly: construct the item, then run it through
/// [`crate::services::pricing::recompute_line`] or edit it with
/// [`crate::services::pricing::apply_edit`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub line_item_id: Uuid,
    pub label: String,
    pub quantity: i64,
    pub original_unit_price: Decimal,
    pub line_discount_percent: Decimal,
    pub line_discount_amount: Decimal,
    pub effective_unit_price: Decimal,
    pub line_total: Decimal,
}

impl LineItem {
    /// Create an undiscounted line item with zeroed derived fields.
    pub fn new(label: impl Into<String>, quantity: i64, unit_price: Decimal) -> Self {
        Self {
            line_item_id: Uuid::new_v4(),
            label: label.into(),
            quantity,
            original_unit_price: unit_price,
            line_discount_percent: Decimal::ZERO,
            line_discount_amount: Decimal::ZERO,
            effective_unit_price: Decimal::ZERO,
            line_total: Decimal::ZERO,
        }
    }
}

/// A single field edit on a line item, as reported by the line-item editor.
///
/// The edited field decides which discount field wins when the two conflict:
/// editing one discount field to a non-zero value zeroes the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItemEdit {
    Label(String),
    Quantity(i64),
    UnitPrice(Decimal),
    DiscountPercent(Decimal),
    DiscountAmount(Decimal),
}
