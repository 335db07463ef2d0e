//! Document submission boundary for the pricing engine.

use crate::error::PricingError;
use crate::models::{BillingOptions, LineItem, PricingBreakdown};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Everything the submission layer needs to persist a document.
///
/// The breakdown already satisfies the engine's invariants; the submission
/// layer performs no further arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    pub document_id: Uuid,
    pub client_name: String,
    pub line_items: Vec<LineItem>,
    pub options: BillingOptions,
    pub breakdown: PricingBreakdown,
    pub metadata: Option<serde_json::Value>,
}

/// Acknowledgement from the submission layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub document_id: Uuid,
    /// Downstream reference, e.g. the persisted document number.
    pub reference: String,
    pub accepted_utc: DateTime<Utc>,
}

/// Write-side collaborator that persists a finished document.
#[async_trait]
pub trait DocumentSubmission: Send + Sync {
    async fn submit_document(
        &self,
        request: &SubmissionRequest,
    ) -> Result<SubmissionReceipt, PricingError>;
}
