//! Document-level billing options for the pricing engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How the goods leave the yard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMode {
    Pickup,
    FreeDelivery,
    PaidDelivery,
}

impl DeliveryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryMode::Pickup => "pickup",
            DeliveryMode::FreeDelivery => "free_delivery",
            DeliveryMode::PaidDelivery => "paid_delivery",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "free_delivery" => DeliveryMode::FreeDelivery,
            "paid_delivery" => DeliveryMode::PaidDelivery,
            _ => DeliveryMode::Pickup,
        }
    }
}

impl Default for DeliveryMode {
    fn default() -> Self {
        DeliveryMode::Pickup
    }
}

/// Document-level settings that affect the total.
///
/// The two global discount fields come from independently edited form
/// controls, so both can be non-zero at the engine boundary. The engine
/// resolves that deterministically: percent takes precedence. Likewise
/// `delivery_fee` keeps whatever the user last typed; it only counts while
/// `delivery_mode` is [`DeliveryMode::PaidDelivery`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingOptions {
    pub global_discount_percent: Decimal,
    pub global_discount_amount: Decimal,
    pub tax_enabled: bool,
    pub tax_rate_percent: Decimal,
    pub delivery_mode: DeliveryMode,
    pub delivery_fee: Decimal,
}

impl Default for BillingOptions {
    fn default() -> Self {
        Self {
            global_discount_percent: Decimal::ZERO,
            global_discount_amount: Decimal::ZERO,
            tax_enabled: false,
            tax_rate_percent: Decimal::ZERO,
            delivery_mode: DeliveryMode::Pickup,
            delivery_fee: Decimal::ZERO,
        }
    }
}
