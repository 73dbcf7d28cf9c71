use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed in percent (6 = 6%), matching the calculator's inputs.
pub type Rate = Decimal;

/// One entry in a bond's cash-flow schedule.
///
/// Period 0 is the purchase leg: no coupon, `principal_payment` is the
/// negated bond price. Intermediate periods carry the coupon only; the
/// final period carries the coupon plus the face value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Period index, 0..=periods
    pub period: u32,
    /// period / frequency, a fractional year marker
    pub year_label: Decimal,
    pub coupon_payment: Money,
    pub principal_payment: Money,
    /// coupon_payment + principal_payment
    pub total_cash_flow: Money,
}

/// Classification of a bond's price against its face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BondType {
    /// Price equals face value (within the par tolerance)
    Par,
    /// Price above face value; `difference` = price − face
    Premium { difference: Money },
    /// Price below face value; `difference` = face − price
    Discount { difference: Money },
}

impl BondType {
    /// Display string for the results summary.
    pub fn description(&self) -> String {
        match self {
            BondType::Par => "trading at par".to_string(),
            BondType::Premium { difference } => {
                format!("trading at a premium of {difference}")
            }
            BondType::Discount { difference } => {
                format!("trading at a discount of {difference}")
            }
        }
    }
}

impl fmt::Display for BondType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
