//! Validation result model for the pricing engine.

use serde::{Deserialize, Serialize};

/// Outcome of document validation.
///
/// Validation failures are returned as a value, never raised: the caller
/// shows the reasons and keeps the draft editable. All violations are
/// collected, not just the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationResult {
    Valid,
    Invalid(Vec<String>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Human-readable violation reasons; empty when valid.
    pub fn reasons(&self) -> &[String] {
        match self {
            ValidationResult::Valid => &[],
            ValidationResult::Invalid(reasons) => reasons,
        }
    }

    pub(crate) fn from_reasons(reasons: Vec<String>) -> Self {
        if reasons.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(reasons)
        }
    }
}
