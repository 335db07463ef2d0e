//! Services module for the pricing engine.

pub mod catalog;
pub mod draft;
pub mod pricing;
pub mod submission;
pub mod validation;

pub use catalog::{CatalogEntry, CatalogLookup};
pub use draft::DocumentDraft;
pub use submission::{DocumentSubmission, SubmissionReceipt, SubmissionRequest};
