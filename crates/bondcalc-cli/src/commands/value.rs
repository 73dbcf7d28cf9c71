use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

use bondcalc_core::validation::BondForm;
use bondcalc_core::valuation;

use crate::input;

/// Arguments for bond valuation
#[derive(Args)]
pub struct ValueArgs {
    /// Par value repaid at maturity (defaults to 100)
    #[arg(long)]
    pub face_value: Option<Decimal>,

    /// Annual coupon rate in percent, 0-10 (e.g. 6 for 6%)
    #[arg(long)]
    pub coupon_rate: Option<Decimal>,

    /// Annual yield to maturity in percent, 0-10
    #[arg(long)]
    pub ytm: Option<Decimal>,

    /// Whole years to maturity, 1-5
    #[arg(long)]
    pub years: Option<Decimal>,

    /// Coupon payments per year (defaults to 2, semi-annual)
    #[arg(long)]
    pub frequency: Option<Decimal>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_value(args: ValueArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let form = resolve_form(&args)?;
    let result = valuation::value_form(&form)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_schedule(args: ValueArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let form = resolve_form(&args)?;
    let result = valuation::value_form(&form)?;
    Ok(serde_json::to_value(result.result.cash_flows)?)
}

/// Resolution order: --input file, then explicit flags, then piped stdin.
fn resolve_form(args: &ValueArgs) -> Result<BondForm, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::read_json(path);
    }
    if has_flags(args) {
        return Ok(form_from_flags(args));
    }
    if let Some(data) = input::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }
    Ok(form_from_flags(args))
}

fn has_flags(args: &ValueArgs) -> bool {
    args.face_value.is_some()
        || args.coupon_rate.is_some()
        || args.ytm.is_some()
        || args.years.is_some()
        || args.frequency.is_some()
}

/// Build the raw form from flags, filling the calculator's form defaults
/// for face value (100) and frequency (semi-annual).
fn form_from_flags(args: &ValueArgs) -> BondForm {
    BondForm {
        face_value: args.face_value.or(Some(dec!(100))),
        coupon_rate: args.coupon_rate,
        ytm: args.ytm,
        years: args.years,
        frequency: args.frequency.or(Some(dec!(2))),
    }
}
