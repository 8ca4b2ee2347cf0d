use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use bond_return_core::maturity::{self, InvestmentParameters};

use crate::input;

/// Parameter sources shared by the maturity and export commands.
///
/// Resolution order: JSON file, piped stdin, then the individual flags.
/// Flag defaults mirror the calculator's initial slider positions.
#[derive(Args)]
pub struct ParamArgs {
    /// Path to a JSON file holding the investment parameters
    #[arg(long)]
    pub input: Option<String>,

    /// Amount invested, in whole currency units
    #[arg(long, default_value = "200000")]
    pub principal: Decimal,

    /// Annual coupon rate in percent (e.g. 8.6)
    #[arg(long, default_value = "8.6")]
    pub rate: Decimal,

    /// Tenure in years; fractional tenures are allowed
    #[arg(long, default_value = "2")]
    pub years: Decimal,

    /// LTCG tax rate in percent, charged on the gain only
    #[arg(long, default_value = "12.5")]
    pub tax: Decimal,
}

/// Arguments for the maturity computation
#[derive(Args)]
pub struct MaturityArgs {
    #[command(flatten)]
    pub params: ParamArgs,
}

/// Resolve investment parameters from file, stdin, or flags.
pub fn resolve_parameters(
    args: &ParamArgs,
) -> Result<InvestmentParameters, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::file::read_json(path);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }
    Ok(InvestmentParameters {
        principal: args.principal,
        annual_rate_percent: args.rate,
        tenure_years: args.years,
        tax_rate_percent: args.tax,
    })
}

pub fn run_maturity(args: MaturityArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let params = resolve_parameters(&args.params)?;
    let result = maturity::compute_maturity(&params)?;
    Ok(serde_json::to_value(result)?)
}
