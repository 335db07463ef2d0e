//! Document validation for the pricing engine.

use crate::models::{BillingOptions, LineItem, ValidationResult};
use rust_decimal::Decimal;

/// Validate a document before submission.
///
/// Every rule is checked independently and all violations are collected, so
/// the caller can surface the complete list at once. Tax and delivery
/// settings are always optional and never produce a violation; the options
/// are accepted here because future document-level rules belong in this
/// function.
pub fn validate_document(
    line_items: &[LineItem],
    _options: &BillingOptions,
    client_name: &str,
) -> ValidationResult {
    let mut reasons = Vec::new();

    if client_name.trim().is_empty() {
        reasons.push("Client name is required".to_string());
    }

    if line_items.is_empty() {
        reasons.push("At least one line item is required".to_string());
    }

    for (index, item) in line_items.iter().enumerate() {
        let position = index + 1;
        if item.label.trim().is_empty() {
            reasons.push(format!("Line {position}: label is required"));
        }
        if item.quantity < 1 {
            reasons.push(format!("Line {position}: quantity must be at least 1"));
        }
        if item.original_unit_price < Decimal::ZERO {
            reasons.push(format!("Line {position}: unit price cannot be negative"));
        }
    }

    ValidationResult::from_reasons(reasons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::pricing::recompute_line;
    use rust_decimal_macros::dec;

    fn line(label: &str, quantity: i64, unit_price: Decimal) -> LineItem {
        recompute_line(&LineItem::new(label, quantity, unit_price))
    }

    #[test]
    fn valid_document_passes() {
        let lines = vec![line("Hollow brick", 100, dec!(12.50))];

        let result = validate_document(&lines, &BillingOptions::default(), "Brick & Mortar LLC");

        assert!(result.is_valid());
        assert!(result.reasons().is_empty());
    }

    #[test]
    fn empty_client_and_no_lines_collects_both_reasons() {
        let result = validate_document(&[], &BillingOptions::default(), "   ");

        assert!(!result.is_valid());
        assert_eq!(result.reasons().len(), 2);
    }

    #[test]
    fn blank_label_is_reported_per_line() {
        let lines = vec![
            line("Facing brick", 10, dec!(20)),
            line("  ", 5, dec!(15)),
        ];

        let result = validate_document(&lines, &BillingOptions::default(), "Client");

        assert_eq!(result.reasons(), &["Line 2: label is required".to_string()]);
    }

    #[test]
    fn tax_and_delivery_fields_never_fail_validation() {
        let lines = vec![line("Clinker brick", 1, dec!(30))];
        let options = BillingOptions {
            tax_enabled: false,
            tax_rate_percent: Decimal::ZERO,
            delivery_fee: Decimal::ZERO,
            ..BillingOptions::default()
        };

        assert!(validate_document(&lines, &options, "Client").is_valid());
    }

    #[test]
    fn unnormalized_line_fields_are_reported() {
        // Items built outside the edit path can still carry raw values.
        let mut bad = line("Raw entry", 1, dec!(10));
        bad.quantity = 0;
        bad.original_unit_price = dec!(-4);

        let result = validate_document(&[bad], &BillingOptions::default(), "Client");

        assert_eq!(result.reasons().len(), 2);
    }
}
