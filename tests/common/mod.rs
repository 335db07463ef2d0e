//! Shared helpers for pricing-engine integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use pricing_engine::services::{
    CatalogEntry, CatalogLookup, DocumentSubmission, SubmissionReceipt, SubmissionRequest,
};
use pricing_engine::{LineItem, PricingError};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::{Mutex, Once};

static TRACING: Once = Once::new();

/// Initialize test logging once per process.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Build a normalized line item.
pub fn line(label: &str, quantity: i64, unit_price: Decimal) -> LineItem {
    pricing_engine::services::pricing::recompute_line(&LineItem::new(label, quantity, unit_price))
}

/// Fixed in-memory catalog of brick products.
pub struct TestCatalog {
    entries: HashMap<String, CatalogEntry>,
}

impl TestCatalog {
    pub fn with_bricks() -> Self {
        let mut entries = HashMap::new();
        for (item_id, label, unit_price) in [
            ("BRK-SOLID", "Solid brick 250x120x65", Decimal::from(150)),
            ("BRK-HOLLOW", "Hollow brick 250x120x88", Decimal::new(1250, 2)),
            ("BRK-FACING", "Facing brick, red", Decimal::from(90)),
        ] {
            entries.insert(
                item_id.to_string(),
                CatalogEntry {
                    item_id: item_id.to_string(),
                    label: label.to_string(),
                    unit_price,
                },
            );
        }
        Self { entries }
    }
}

#[async_trait]
impl CatalogLookup for TestCatalog {
    async fn lookup(&self, item_id: &str) -> Result<Option<CatalogEntry>, PricingError> {
        Ok(self.entries.get(item_id).cloned())
    }
}

/// Submission stub that records every request it accepts.
#[derive(Default)]
pub struct RecordingSubmitter {
    requests: Mutex<Vec<SubmissionRequest>>,
}

impl RecordingSubmitter {
    pub fn requests(&self) -> Vec<SubmissionRequest> {
        self.requests.lock().expect("submitter lock poisoned").clone()
    }
}

#[async_trait]
impl DocumentSubmission for RecordingSubmitter {
    async fn submit_document(
        &self,
        request: &SubmissionRequest,
    ) -> Result<SubmissionReceipt, PricingError> {
        let mut requests = self.requests.lock().expect("submitter lock poisoned");
        requests.push(request.clone());
        Ok(SubmissionReceipt {
            document_id: request.document_id,
            reference: format!("DOC-{:04}", requests.len()),
            accepted_utc: Utc::now(),
        })
    }
}

/// Submission stub that always fails, for error-path tests.
pub struct FailingSubmitter;

#[async_trait]
impl DocumentSubmission for FailingSubmitter {
    async fn submit_document(
        &self,
        _request: &SubmissionRequest,
    ) -> Result<SubmissionReceipt, PricingError> {
        Err(PricingError::Submission(anyhow::anyhow!(
            "ledger unavailable"
        )))
    }
}
