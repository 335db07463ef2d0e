//! Domain models for the pricing engine.

mod billing;
mod breakdown;
mod line_item;
mod validation;

pub use billing::{BillingOptions, DeliveryMode};
pub use breakdown::PricingBreakdown;
pub use line_item::{LineItem, LineItemEdit};
pub use validation::ValidationResult;
