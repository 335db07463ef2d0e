//! Error types for the pricing engine.

use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by the draft facade and its collaborators.
///
/// The computation functions themselves are total and never return errors;
/// out-of-range numeric input is clamped, not rejected.
#[derive(Debug, Error)]
pub enum PricingError {
    #[error("Line item not found: {0}")]
    LineItemNotFound(Uuid),

    #[error("Unknown catalog item: {0}")]
    CatalogMiss(String),

    #[error("Document is not valid for submission: {}", .0.join("; "))]
    InvalidDocument(Vec<String>),

    #[error("Catalog lookup failed: {0}")]
    Catalog(anyhow::Error),

    #[error("Document submission failed: {0}")]
    Submission(anyhow::Error),
}
