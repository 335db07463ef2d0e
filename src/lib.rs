//! Document pricing engine for quotations and invoices.
//!
//! The computation core in [`services::pricing`] is pure and synchronous:
//! per-line recompute, discount resolution, conditional tax and delivery
//! fees, and whole-document aggregation. [`DocumentDraft`] wraps it as the
//! mutable draft the caller edits; the catalog and submission collaborators
//! sit behind async traits at the crate boundary.
//!
//! Display formatting (thousands separators, currency suffix) is the
//! presentation layer's job; everything here is plain [`rust_decimal`]
//! values.

pub mod error;
pub mod models;
pub mod services;

pub use error::PricingError;
pub use models::{
    BillingOptions, DeliveryMode, LineItem, LineItemEdit, PricingBreakdown, ValidationResult,
};
pub use services::draft::DocumentDraft;
