//! Document draft facade for the pricing engine.

use crate::error::PricingError;
use crate::models::{
    BillingOptions, LineItem, LineItemEdit, PricingBreakdown, ValidationResult,
};
use crate::services::catalog::CatalogLookup;
use crate::services::submission::{DocumentSubmission, SubmissionReceipt, SubmissionRequest};
use crate::services::{pricing, validation};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

/// An in-progress quotation or invoice.
///
/// The draft owns the mutable state the UI edits and keeps its stored
/// breakdown in step with it: each mutation recomputes the affected line and
/// then the whole document, so `breakdown()` is always current. All
/// arithmetic lives in [`pricing`]; the draft only sequences it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentDraft {
    document_id: Uuid,
    client_name: String,
    line_items: Vec<LineItem>,
    options: BillingOptions,
    breakdown: PricingBreakdown,
    metadata: Option<serde_json::Value>,
    created_utc: DateTime<Utc>,
}

impl DocumentDraft {
    /// Create an empty draft for a client.
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            document_id: Uuid::new_v4(),
            client_name: client_name.into(),
            line_items: Vec::new(),
            options: BillingOptions::default(),
            breakdown: PricingBreakdown::default(),
            metadata: None,
            created_utc: Utc::now(),
        }
    }

    pub fn document_id(&self) -> Uuid {
        self.document_id
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    pub fn options(&self) -> &BillingOptions {
        &self.options
    }

    /// The breakdown computed from the current lines and options.
    pub fn breakdown(&self) -> &PricingBreakdown {
        &self.breakdown
    }

    pub fn created_utc(&self) -> DateTime<Utc> {
        self.created_utc
    }

    pub fn set_client_name(&mut self, client_name: impl Into<String>) {
        self.client_name = client_name.into();
    }

    /// Attach free-form metadata passed through to the submission layer.
    pub fn set_metadata(&mut self, metadata: Option<serde_json::Value>) {
        self.metadata = metadata;
    }

    /// Add a line seeded from the catalog.
    #[instrument(skip(self, catalog), fields(document_id = %self.document_id, item_id = %item_id))]
    pub async fn add_catalog_item(
        &mut self,
        catalog: &dyn CatalogLookup,
        item_id: &str,
        quantity: i64,
    ) -> Result<Uuid, PricingError> {
        let entry = catalog
            .lookup(item_id)
            .await?
            .ok_or_else(|| PricingError::CatalogMiss(item_id.to_string()))?;

        let line_item_id = self.push_line(entry.label, quantity, entry.unit_price);
        info!(line_item_id = %line_item_id, "Catalog item added to draft");
        Ok(line_item_id)
    }

    /// Add a manually entered line.
    #[instrument(skip(self, label), fields(document_id = %self.document_id))]
    pub fn add_custom_item(
        &mut self,
        label: impl Into<String>,
        quantity: i64,
        unit_price: Decimal,
    ) -> Uuid {
        let line_item_id = self.push_line(label.into(), quantity, unit_price);
        info!(line_item_id = %line_item_id, "Custom item added to draft");
        line_item_id
    }

    fn push_line(&mut self, label: String, quantity: i64, unit_price: Decimal) -> Uuid {
        let item = pricing::recompute_line(&LineItem::new(label, quantity, unit_price));
        let line_item_id = item.line_item_id;
        self.line_items.push(item);
        self.refresh_breakdown();
        line_item_id
    }

    /// Apply a single field edit to a line.
    #[instrument(skip(self, edit), fields(document_id = %self.document_id, line_item_id = %line_item_id))]
    pub fn edit_line(
        &mut self,
        line_item_id: Uuid,
        edit: LineItemEdit,
    ) -> Result<(), PricingError> {
        let item = self
            .line_items
            .iter_mut()
            .find(|item| item.line_item_id == line_item_id)
            .ok_or(PricingError::LineItemNotFound(line_item_id))?;

        *item = pricing::apply_edit(item, edit);
        self.refresh_breakdown();
        Ok(())
    }

    /// Remove a line from the draft.
    #[instrument(skip(self), fields(document_id = %self.document_id, line_item_id = %line_item_id))]
    pub fn remove_line(&mut self, line_item_id: Uuid) -> Result<(), PricingError> {
        let index = self
            .line_items
            .iter()
            .position(|item| item.line_item_id == line_item_id)
            .ok_or(PricingError::LineItemNotFound(line_item_id))?;

        self.line_items.remove(index);
        self.refresh_breakdown();
        info!("Line item removed from draft");
        Ok(())
    }

    /// Replace the billing options wholesale.
    ///
    /// The options are stored as given; the engine resolves any conflicting
    /// fields (both global discount fields non-zero, stale delivery fee) at
    /// computation time.
    #[instrument(skip(self, options), fields(document_id = %self.document_id))]
    pub fn update_options(&mut self, options: BillingOptions) {
        self.options = options;
        self.refresh_breakdown();
    }

    fn refresh_breakdown(&mut self) {
        self.breakdown = pricing::compute_breakdown(&self.line_items, &self.options);
    }

    /// Check the draft against the submission rules.
    pub fn validate(&self) -> ValidationResult {
        validation::validate_document(&self.line_items, &self.options, &self.client_name)
    }

    /// Validate and hand the finished document to the submission layer.
    ///
    /// Refuses with [`PricingError::InvalidDocument`] while any validation
    /// reason is present; the submitter is not invoked in that case.
    #[instrument(skip(self, submitter), fields(document_id = %self.document_id))]
    pub async fn submit(
        &self,
        submitter: &dyn DocumentSubmission,
    ) -> Result<SubmissionReceipt, PricingError> {
        if let ValidationResult::Invalid(reasons) = self.validate() {
            return Err(PricingError::InvalidDocument(reasons));
        }

        let request = SubmissionRequest {
            document_id: self.document_id,
            client_name: self.client_name.clone(),
            line_items: self.line_items.clone(),
            options: self.options.clone(),
            breakdown: self.breakdown.clone(),
            metadata: self.metadata.clone(),
        };

        let receipt = submitter.submit_document(&request).await?;
        info!(reference = %receipt.reference, "Document submitted");
        Ok(receipt)
    }
}
