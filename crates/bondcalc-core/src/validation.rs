//! Range validation for the five calculator inputs.
//!
//! Validation collects every field failure into a `field → message` map so
//! the caller can surface all of them at once, the way a form does. The
//! engine only accepts [`BondInputs`], which cannot be built without passing
//! these checks, so an out-of-domain valuation call is unrepresentable.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::types::{Money, Rate};

const MAX_RATE_PCT: Decimal = dec!(10);
const MIN_YEARS: Decimal = dec!(1);
const MAX_YEARS: Decimal = dec!(5);

/// A raw form submission. Every field is optional because the upstream
/// form may leave it blank or fail to parse it as a number.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BondForm {
    pub face_value: Option<Decimal>,
    pub coupon_rate: Option<Decimal>,
    pub ytm: Option<Decimal>,
    pub years: Option<Decimal>,
    pub frequency: Option<Decimal>,
}

/// Field-level validation failures, keyed by input field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors(pub BTreeMap<String, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    fn push(&mut self, field: &str, message: &str) {
        self.0.insert(field.to_string(), message.to_string());
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Inputs that have passed range validation.
///
/// Fields are private; the only ways in are [`validate`] and
/// [`BondInputs::new`], which runs the same checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BondInputs {
    face_value: Money,
    coupon_rate: Rate,
    ytm: Rate,
    years: u32,
    frequency: u32,
}

impl BondInputs {
    /// Typed constructor for callers that already hold concrete values.
    /// Revalidates against the same range table as [`validate`].
    pub fn new(
        face_value: Money,
        coupon_rate: Rate,
        ytm: Rate,
        years: u32,
        frequency: u32,
    ) -> Result<Self, ValidationErrors> {
        validate(&BondForm {
            face_value: Some(face_value),
            coupon_rate: Some(coupon_rate),
            ytm: Some(ytm),
            years: Some(Decimal::from(years)),
            frequency: Some(Decimal::from(frequency)),
        })
    }

    pub fn face_value(&self) -> Money {
        self.face_value
    }

    pub fn coupon_rate(&self) -> Rate {
        self.coupon_rate
    }

    pub fn ytm(&self) -> Rate {
        self.ytm
    }

    pub fn years(&self) -> u32 {
        self.years
    }

    pub fn frequency(&self) -> u32 {
        self.frequency
    }
}

/// Validate a raw form against the input range table.
///
/// Returns validated inputs, or the full map of field errors. Years must be
/// a whole number, so `years × frequency` is always a whole period count;
/// fractional maturities are rejected here rather than rounded.
pub fn validate(form: &BondForm) -> Result<BondInputs, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let face_value = match form.face_value {
        None => {
            errors.push("face_value", "Face value is required");
            None
        }
        Some(v) if v <= Decimal::ZERO => {
            errors.push("face_value", "Face value must be positive");
            None
        }
        Some(v) => Some(v),
    };

    let coupon_rate = check_rate(&mut errors, "coupon_rate", "Coupon rate", form.coupon_rate);
    let ytm = check_rate(&mut errors, "ytm", "Yield to maturity", form.ytm);

    let years = match form.years {
        None => {
            errors.push("years", "Years to maturity is required");
            None
        }
        Some(v) if !v.fract().is_zero() || v < MIN_YEARS || v > MAX_YEARS => {
            errors.push(
                "years",
                "Years to maturity must be a whole number between 1 and 5",
            );
            None
        }
        Some(v) => v.to_u32(),
    };

    let frequency = match form.frequency {
        None => {
            errors.push("frequency", "Payment frequency is required");
            None
        }
        Some(v) if !v.fract().is_zero() || v < Decimal::ONE => {
            errors.push("frequency", "Payment frequency must be a positive integer");
            None
        }
        Some(v) => v.to_u32(),
    };

    match (face_value, coupon_rate, ytm, years, frequency) {
        (Some(face_value), Some(coupon_rate), Some(ytm), Some(years), Some(frequency))
            if errors.is_empty() =>
        {
            Ok(BondInputs {
                face_value,
                coupon_rate,
                ytm,
                years,
                frequency,
            })
        }
        _ => Err(errors),
    }
}

fn check_rate(
    errors: &mut ValidationErrors,
    field: &str,
    label: &str,
    value: Option<Decimal>,
) -> Option<Rate> {
    match value {
        None => {
            errors.push(field, &format!("{label} is required"));
            None
        }
        Some(v) if v < Decimal::ZERO || v > MAX_RATE_PCT => {
            errors.push(field, &format!("{label} must be between 0% and 10%"));
            None
        }
        Some(v) => Some(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn full_form() -> BondForm {
        BondForm {
            face_value: Some(dec!(100)),
            coupon_rate: Some(dec!(6)),
            ytm: Some(dec!(6)),
            years: Some(dec!(5)),
            frequency: Some(dec!(2)),
        }
    }

    // -----------------------------------------------------------------------
    // 1. Valid form passes and values survive
    // -----------------------------------------------------------------------
    #[test]
    fn test_valid_form() {
        let inputs = validate(&full_form()).unwrap();
        assert_eq!(inputs.face_value(), dec!(100));
        assert_eq!(inputs.coupon_rate(), dec!(6));
        assert_eq!(inputs.ytm(), dec!(6));
        assert_eq!(inputs.years(), 5);
        assert_eq!(inputs.frequency(), 2);
    }

    // -----------------------------------------------------------------------
    // 2. Empty form reports every field as required
    // -----------------------------------------------------------------------
    #[test]
    fn test_empty_form_all_required() {
        let errors = validate(&BondForm::default()).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get("face_value"), Some("Face value is required"));
        assert_eq!(errors.get("coupon_rate"), Some("Coupon rate is required"));
        assert_eq!(errors.get("ytm"), Some("Yield to maturity is required"));
        assert_eq!(errors.get("years"), Some("Years to maturity is required"));
        assert_eq!(
            errors.get("frequency"),
            Some("Payment frequency is required")
        );
    }

    // -----------------------------------------------------------------------
    // 3. Rate bounds are inclusive
    // -----------------------------------------------------------------------
    #[test]
    fn test_rate_bounds_inclusive() {
        let mut form = full_form();
        form.coupon_rate = Some(dec!(0));
        form.ytm = Some(dec!(10));
        assert!(validate(&form).is_ok());

        form.coupon_rate = Some(dec!(-0.01));
        form.ytm = Some(dec!(10.01));
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.get("coupon_rate"),
            Some("Coupon rate must be between 0% and 10%")
        );
        assert_eq!(
            errors.get("ytm"),
            Some("Yield to maturity must be between 0% and 10%")
        );
    }

    // -----------------------------------------------------------------------
    // 4. Years must be whole and within 1..=5
    // -----------------------------------------------------------------------
    #[test]
    fn test_years_bounds() {
        for bad in [dec!(0), dec!(6), dec!(2.5), dec!(-1)] {
            let mut form = full_form();
            form.years = Some(bad);
            let errors = validate(&form).unwrap_err();
            assert_eq!(
                errors.get("years"),
                Some("Years to maturity must be a whole number between 1 and 5"),
                "years = {bad} should be rejected"
            );
        }

        for good in [dec!(1), dec!(3), dec!(5)] {
            let mut form = full_form();
            form.years = Some(good);
            assert!(validate(&form).is_ok(), "years = {good} should be accepted");
        }
    }

    // -----------------------------------------------------------------------
    // 5. Frequency must be a positive integer
    // -----------------------------------------------------------------------
    #[test]
    fn test_frequency_bounds() {
        for bad in [dec!(0), dec!(-2), dec!(1.5)] {
            let mut form = full_form();
            form.frequency = Some(bad);
            let errors = validate(&form).unwrap_err();
            assert_eq!(
                errors.get("frequency"),
                Some("Payment frequency must be a positive integer"),
                "frequency = {bad} should be rejected"
            );
        }

        let mut form = full_form();
        form.frequency = Some(dec!(12));
        assert_eq!(validate(&form).unwrap().frequency(), 12);
    }

    // -----------------------------------------------------------------------
    // 6. Non-positive face value
    // -----------------------------------------------------------------------
    #[test]
    fn test_face_value_must_be_positive() {
        for bad in [dec!(0), dec!(-100)] {
            let mut form = full_form();
            form.face_value = Some(bad);
            let errors = validate(&form).unwrap_err();
            assert_eq!(errors.get("face_value"), Some("Face value must be positive"));
        }
    }

    // -----------------------------------------------------------------------
    // 7. Error map is ordered by field name and Display joins entries
    // -----------------------------------------------------------------------
    #[test]
    fn test_error_map_ordering_and_display() {
        let mut form = full_form();
        form.ytm = Some(dec!(11));
        form.face_value = None;
        let errors = validate(&form).unwrap_err();

        let fields: Vec<&String> = errors.0.keys().collect();
        assert_eq!(fields, ["face_value", "ytm"]);
        assert_eq!(
            errors.to_string(),
            "face_value: Face value is required; ytm: Yield to maturity must be between 0% and 10%"
        );
    }

    // -----------------------------------------------------------------------
    // 8. Typed constructor revalidates
    // -----------------------------------------------------------------------
    #[test]
    fn test_typed_constructor() {
        let inputs = BondInputs::new(dec!(100), dec!(8), dec!(6), 5, 2).unwrap();
        assert_eq!(inputs.coupon_rate(), dec!(8));

        let errors = BondInputs::new(dec!(100), dec!(12), dec!(6), 5, 2).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.get("coupon_rate").is_some());
    }

    // -----------------------------------------------------------------------
    // 9. Serde: errors serialize as a flat field → message map
    // -----------------------------------------------------------------------
    #[test]
    fn test_errors_serialize_as_map() {
        let mut form = full_form();
        form.years = None;
        let errors = validate(&form).unwrap_err();
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["years"], "Years to maturity is required");
    }
}
