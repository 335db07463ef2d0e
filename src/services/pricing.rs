//! Pricing computations for document drafts.
//!
//! Every function here is pure and total: no I/O, no shared state, no error
//! channel. Out-of-range input (negative quantity, discount above 100%) is
//! user-entry noise and is clamped silently; the functions always return a
//! consistent, non-negative result.

use crate::models::{BillingOptions, DeliveryMode, LineItem, LineItemEdit, PricingBreakdown};
use rust_decimal::Decimal;

/// Clamp raw line item fields into their valid ranges.
fn clamp_line_fields(item: &mut LineItem) {
    if item.quantity < 1 {
        item.quantity = 1;
    }
    if item.original_unit_price < Decimal::ZERO {
        item.original_unit_price = Decimal::ZERO;
    }
    item.line_discount_percent = item
        .line_discount_percent
        .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
    if item.line_discount_amount < Decimal::ZERO {
        item.line_discount_amount = Decimal::ZERO;
    }
}

/// Resolve the per-line discount to a currency amount per unit.
///
/// Percent takes precedence when both fields are somehow non-zero, so the
/// result is deterministic even for callers that skipped the edit path.
fn resolve_line_discount(item: &LineItem) -> Decimal {
    if item.line_discount_percent > Decimal::ZERO {
        item.original_unit_price * item.line_discount_percent / Decimal::ONE_HUNDRED
    } else if item.line_discount_amount > Decimal::ZERO {
        item.line_discount_amount
    } else {
        Decimal::ZERO
    }
}

/// Recompute a line item's derived fields from its current state.
///
/// Clamps the editable fields, resolves the active discount, then rederives
/// `effective_unit_price` (floored at zero) and `line_total`. Idempotent.
pub fn recompute_line(item: &LineItem) -> LineItem {
    let mut next = item.clone();
    clamp_line_fields(&mut next);
    let discount = resolve_line_discount(&next);
    next.effective_unit_price = (next.original_unit_price - discount).max(Decimal::ZERO);
    next.line_total = Decimal::from(next.quantity) * next.effective_unit_price;
    next
}

/// Apply a single field edit to a line item and recompute it.
///
/// Editing one discount field to a non-zero value zeroes the other; clearing
/// a discount field leaves whichever one is still non-zero in charge.
pub fn apply_edit(item: &LineItem, edit: LineItemEdit) -> LineItem {
    let mut next = item.clone();
    match edit {
        LineItemEdit::Label(label) => next.label = label,
        LineItemEdit::Quantity(quantity) => next.quantity = quantity,
        LineItemEdit::UnitPrice(price) => next.original_unit_price = price,
        LineItemEdit::DiscountPercent(percent) => {
            next.line_discount_percent = percent;
            if percent > Decimal::ZERO {
                next.line_discount_amount = Decimal::ZERO;
            }
        }
        LineItemEdit::DiscountAmount(amount) => {
            next.line_discount_amount = amount;
            if amount > Decimal::ZERO {
                next.line_discount_percent = Decimal::ZERO;
            }
        }
    }
    recompute_line(&next)
}

/// Resolve the whole-document discount against a subtotal.
///
/// Percent takes precedence over the fixed amount, and a fixed amount is
/// capped at the subtotal: a discount can never push the document negative.
pub fn resolve_global_discount(subtotal: Decimal, options: &BillingOptions) -> Decimal {
    if options.global_discount_percent > Decimal::ZERO {
        let percent = options
            .global_discount_percent
            .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
        subtotal * percent / Decimal::ONE_HUNDRED
    } else {
        options
            .global_discount_amount
            .max(Decimal::ZERO)
            .min(subtotal)
    }
}

/// Resolve the tax amount for a taxable base. Zero while tax is disabled,
/// whatever the stored rate says.
pub fn resolve_tax(taxable_base: Decimal, options: &BillingOptions) -> Decimal {
    if !options.tax_enabled {
        return Decimal::ZERO;
    }
    taxable_base * options.tax_rate_percent.max(Decimal::ZERO) / Decimal::ONE_HUNDRED
}

/// Resolve the delivery fee from the current delivery mode.
///
/// Pickup and free delivery always resolve to zero; a stale fee left over
/// from a mode switch never leaks into the total.
pub fn resolve_delivery_fee(options: &BillingOptions) -> Decimal {
    match options.delivery_mode {
        DeliveryMode::PaidDelivery => options.delivery_fee.max(Decimal::ZERO),
        DeliveryMode::Pickup | DeliveryMode::FreeDelivery => Decimal::ZERO,
    }
}

/// Compute the full breakdown for a document.
///
/// Renormalizes every line first, so the result depends only on the inputs
/// handed in, then applies the global discount, tax, and delivery fee in
/// that order. Does not mutate its inputs; summation is order independent.
pub fn compute_breakdown(line_items: &[LineItem], options: &BillingOptions) -> PricingBreakdown {
    let subtotal: Decimal = line_items
        .iter()
        .map(|item| recompute_line(item).line_total)
        .sum();
    let global_discount_resolved = resolve_global_discount(subtotal, options);
    let taxable_base = subtotal - global_discount_resolved;
    let tax_amount = resolve_tax(taxable_base, options);
    let delivery_fee_resolved = resolve_delivery_fee(options);

    PricingBreakdown {
        subtotal,
        global_discount_resolved,
        taxable_base,
        tax_amount,
        delivery_fee_resolved,
        grand_total: taxable_base + tax_amount + delivery_fee_resolved,
    }
}
