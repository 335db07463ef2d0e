//! Catalog lookup boundary for the pricing engine.

use crate::error::PricingError;
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A sellable catalog entry, used to seed a new line item's label and price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub item_id: String,
    pub label: String,
    pub unit_price: Decimal,
}

/// Read-side catalog collaborator.
///
/// The engine treats the catalog as an opaque lookup: the price is copied
/// into the line item once and never refreshed afterwards, even if the
/// catalog changes while the draft is open.
#[async_trait]
pub trait CatalogLookup: Send + Sync {
    async fn lookup(&self, item_id: &str) -> Result<Option<CatalogEntry>, PricingError>;
}
