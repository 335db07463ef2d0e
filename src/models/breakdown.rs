//! Resolved pricing breakdown for the pricing engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fully resolved financial breakdown of a document.
///
/// Every field is derived; the breakdown is a deterministic function of the
/// line items and billing options it was computed from. `grand_total` is
/// never negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingBreakdown {
    /// Sum of all line totals.
    pub subtotal: Decimal,
    /// Whole-document discount, capped at the subtotal.
    pub global_discount_resolved: Decimal,
    /// Subtotal minus the global discount; the amount tax applies to.
    pub taxable_base: Decimal,
    pub tax_amount: Decimal,
    pub delivery_fee_resolved: Decimal,
    /// Taxable base plus tax plus delivery fee.
    pub grand_total: Decimal,
}

impl Default for PricingBreakdown {
    fn default() -> Self {
        Self {
            subtotal: Decimal::ZERO,
            global_discount_resolved: Decimal::ZERO,
            taxable_base: Decimal::ZERO,
            tax_amount: Decimal::ZERO,
            delivery_fee_resolved: Decimal::ZERO,
            grand_total: Decimal::ZERO,
        }
    }
}
