//! Bond valuation engine.
//!
//! Discounts a level coupon stream and the face value at the periodic yield,
//! builds the period-by-period cash-flow schedule, and classifies the bond as
//! trading at par, a premium, or a discount.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::types::{with_metadata, BondType, CashFlow, ComputationOutput, Money, Rate};
use crate::validation::{self, BondForm, BondInputs};
use crate::BondCalcResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const ONE_HUNDRED: Decimal = dec!(100);

/// Absolute price tolerance for the par classification. Keeps the label from
/// flapping between par and premium/discount on sub-cent price noise.
pub const PAR_TOLERANCE: Decimal = dec!(0.005);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Output of a bond valuation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BondValuationOutput {
    /// Present value of all future cash flows
    pub bond_price: Money,
    /// Full schedule, period 0 (purchase) through the final period
    pub cash_flows: Vec<CashFlow>,
    /// Number of coupon periods = years × frequency
    pub periods: u32,
    /// Coupon amount per period
    pub periodic_coupon: Money,
    /// Discount rate per period, as a decimal (ytm / 100 / frequency)
    pub periodic_yield: Rate,
    /// Present value of the coupon stream
    pub pv_coupons: Money,
    /// Present value of the face value
    pub pv_face_value: Money,
    /// Par / premium / discount classification
    pub bond_type: BondType,
    /// Display string for the classification, for renderers
    pub bond_type_description: String,
    /// Sum of all coupon payments, undiscounted
    pub total_coupon_payments: Money,
    /// Total nominal return: coupons + face value − price paid
    pub nominal_gain: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Value a bond from validated inputs.
///
/// Pure and total: [`BondInputs`] guarantees at least one whole period and a
/// non-negative yield, so there is nothing left to fail on. At zero yield
/// every discount factor is one and the price degenerates to the undiscounted
/// sum of coupons plus face value.
pub fn value_bond(inputs: &BondInputs) -> ComputationOutput<BondValuationOutput> {
    let start = Instant::now();

    let periods = inputs.years() * inputs.frequency();
    let freq = Decimal::from(inputs.frequency());
    let periodic_coupon = inputs.face_value() * (inputs.coupon_rate() / ONE_HUNDRED) / freq;
    let periodic_yield = (inputs.ytm() / ONE_HUNDRED) / freq;

    // Discount factors by iterative multiplication rather than powd: after
    // the loop, discount = (1 + y)^periods, which prices the face value.
    let one_plus_y = Decimal::ONE + periodic_yield;
    let mut discount = Decimal::ONE;
    let mut pv_coupons = Decimal::ZERO;
    for _ in 1..=periods {
        discount *= one_plus_y;
        pv_coupons += periodic_coupon / discount;
    }
    let pv_face_value = inputs.face_value() / discount;
    let bond_price = pv_coupons + pv_face_value;

    let cash_flows = build_schedule(
        periods,
        freq,
        periodic_coupon,
        inputs.face_value(),
        bond_price,
    );
    let bond_type = classify(bond_price, inputs.face_value());
    let bond_type_description = bond_type.description();

    let total_coupon_payments = periodic_coupon * Decimal::from(periods);
    let nominal_gain = total_coupon_payments + inputs.face_value() - bond_price;

    let output = BondValuationOutput {
        bond_price,
        cash_flows,
        periods,
        periodic_coupon,
        periodic_yield,
        pv_coupons,
        pv_face_value,
        bond_type,
        bond_type_description,
        total_coupon_payments,
        nominal_gain,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    with_metadata(
        "Bond Valuation — PV of level coupon stream plus discounted face value",
        inputs,
        Vec::new(),
        elapsed,
        output,
    )
}

/// Validate a raw form and value the bond in one step.
///
/// Folds field errors into [`crate::BondCalcError::InvalidInput`]. Callers
/// that render per-field messages (the browser form) should run
/// [`crate::validation::validate`] themselves and keep the map.
pub fn value_form(form: &BondForm) -> BondCalcResult<ComputationOutput<BondValuationOutput>> {
    let inputs = validation::validate(form)?;
    Ok(value_bond(&inputs))
}

// ---------------------------------------------------------------------------
// Cash-flow schedule
// ---------------------------------------------------------------------------

fn build_schedule(
    periods: u32,
    freq: Decimal,
    periodic_coupon: Money,
    face_value: Money,
    bond_price: Money,
) -> Vec<CashFlow> {
    let mut flows = Vec::with_capacity(periods as usize + 1);

    // Purchase leg
    flows.push(CashFlow {
        period: 0,
        year_label: Decimal::ZERO,
        coupon_payment: Decimal::ZERO,
        principal_payment: -bond_price,
        total_cash_flow: -bond_price,
    });

    for period in 1..=periods {
        let principal_payment = if period == periods {
            face_value
        } else {
            Decimal::ZERO
        };
        flows.push(CashFlow {
            period,
            year_label: Decimal::from(period) / freq,
            coupon_payment: periodic_coupon,
            principal_payment,
            total_cash_flow: periodic_coupon + principal_payment,
        });
    }

    flows
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

fn classify(bond_price: Money, face_value: Money) -> BondType {
    let difference = bond_price - face_value;
    if difference.abs() <= PAR_TOLERANCE {
        BondType::Par
    } else if difference > Decimal::ZERO {
        BondType::Premium { difference }
    } else {
        BondType::Discount {
            difference: -difference,
        }
    }
}
