//! Net-return module for fixed-rate cumulative bonds.
//!
//! Computes the gross maturity value under annual compounding, the LTCG tax
//! charged on the interest component only, and the resulting net maturity,
//! net gain, and annualized (CAGR) return.

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::BondReturnError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate, Years};
use crate::BondReturnResult;

const HUNDRED: Decimal = dec!(100);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for the net-return computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentParameters {
    /// Amount invested at issue, in whole currency units
    pub principal: Money,
    /// Annual coupon rate as a percentage (e.g. 8.6 = 8.6% p.a.)
    pub annual_rate_percent: Rate,
    /// Tenure in years; fractional tenures are allowed
    pub tenure_years: Years,
    /// LTCG tax rate as a percentage of the gain (e.g. 12.5 = 12.5%)
    pub tax_rate_percent: Rate,
}

/// Output of the net-return computation.
///
/// Currency figures are rounded to the nearest whole unit independently at
/// each derived step: gross first, then tax on the interest implied by the
/// rounded gross. Percentages are left unrounded for the caller to format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaturityResult {
    /// Principal + compounded interest before tax
    pub gross_maturity: Money,
    /// Gross maturity less principal (negative values from rounding are valid)
    pub total_interest: Money,
    /// Tax charged on the interest component only, never on principal
    pub tax_amount: Money,
    /// Gross maturity less tax
    pub net_maturity: Money,
    /// Net maturity less principal
    pub net_gain: Money,
    /// Net gain over the entire tenure, as a percentage of principal
    pub net_gain_percent: Rate,
    /// Constant yearly growth rate producing the observed net return (CAGR)
    pub annualized_return_percent: Rate,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute gross and net maturity values, tax on gain, and return percentages
/// for a cumulative bond held to maturity.
///
/// The derivation is pure and deterministic: identical inputs always produce
/// identical outputs. Validation happens here at the boundary; the arithmetic
/// below assumes validated input.
pub fn compute_maturity(
    params: &InvestmentParameters,
) -> BondReturnResult<ComputationOutput<MaturityResult>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    // --- Validate ---
    validate_params(params)?;

    if params.annual_rate_percent < Decimal::ZERO {
        warnings.push("Coupon rate is negative; treating as a guaranteed loss".into());
    }
    if params.tax_rate_percent < Decimal::ZERO || params.tax_rate_percent > HUNDRED {
        warnings.push("Tax rate outside [0, 100]; applied as given".into());
    }

    // --- Gross maturity: principal × (1 + r/100)^t ---
    let gross_maturity = if params.annual_rate_percent.is_zero() {
        round_whole(params.principal)
    } else {
        let growth =
            (Decimal::ONE + params.annual_rate_percent / HUNDRED).powd(params.tenure_years);
        round_whole(params.principal * growth)
    };

    // --- Interest and tax on gain ---
    let total_interest = gross_maturity - params.principal;
    let tax_amount = round_whole(total_interest * params.tax_rate_percent / HUNDRED);

    // --- Net figures ---
    let net_maturity = gross_maturity - tax_amount;
    let net_gain = net_maturity - params.principal;
    let net_gain_percent = net_gain / params.principal * HUNDRED;

    // --- Annualized return (CAGR) ---
    let annualized_return_percent = if net_maturity == params.principal {
        Decimal::ZERO
    } else if net_maturity <= Decimal::ZERO {
        warnings.push("Net maturity is not positive; annualized return undefined".into());
        Decimal::ZERO
    } else {
        let ratio = net_maturity / params.principal;
        (ratio.powd(Decimal::ONE / params.tenure_years) - Decimal::ONE) * HUNDRED
    };

    let result = MaturityResult {
        gross_maturity,
        total_interest,
        tax_amount,
        net_maturity,
        net_gain,
        net_gain_percent,
        annualized_return_percent,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Cumulative bond net return — annual compounding, LTCG on interest only",
        params,
        warnings,
        elapsed,
        result,
    ))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_params(params: &InvestmentParameters) -> BondReturnResult<()> {
    if params.principal <= Decimal::ZERO {
        return Err(BondReturnError::InvalidInput {
            field: "principal".into(),
            reason: "Principal must be positive".into(),
        });
    }
    if params.tenure_years <= Decimal::ZERO {
        return Err(BondReturnError::InvalidInput {
            field: "tenure_years".into(),
            reason: "Tenure must be positive".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Rounding
// ---------------------------------------------------------------------------

/// Round to the nearest whole currency unit, half away from zero.
fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn params(principal: Money, rate: Rate, years: Years, tax: Rate) -> InvestmentParameters {
        InvestmentParameters {
            principal,
            annual_rate_percent: rate,
            tenure_years: years,
            tax_rate_percent: tax,
        }
    }

    // -----------------------------------------------------------------------
    // 1. Reference scenario: 200k at 8.6% for 2 years, 12.5% LTCG
    // -----------------------------------------------------------------------
    #[test]
    fn test_reference_scenario() {
        let out = compute_maturity(&params(dec!(200000), dec!(8.6), dec!(2), dec!(12.5)))
            .unwrap()
            .result;

        // 200000 × 1.086² = 235879.20
        assert_eq!(out.gross_maturity, dec!(235879));
        assert_eq!(out.total_interest, dec!(35879));
        // 35879 × 0.125 = 4484.875 → 4485
        assert_eq!(out.tax_amount, dec!(4485));
        assert_eq!(out.net_maturity, dec!(231394));
        assert_eq!(out.net_gain, dec!(31394));
        assert_eq!(out.net_gain_percent, dec!(15.697));

        // CAGR: sqrt(231394 / 200000) − 1 ≈ 7.56%
        let diff = (out.annualized_return_percent - dec!(7.5626)).abs();
        assert!(
            diff < dec!(0.01),
            "Annualized return should be ~7.56%, got {}",
            out.annualized_return_percent
        );
    }

    // -----------------------------------------------------------------------
    // 2. Zero rate: gross equals principal, everything downstream zero
    // -----------------------------------------------------------------------
    #[test]
    fn test_zero_rate() {
        let out = compute_maturity(&params(dec!(500000), dec!(0), dec!(7), dec!(12.5)))
            .unwrap()
            .result;

        assert_eq!(out.gross_maturity, dec!(500000));
        assert_eq!(out.total_interest, dec!(0));
        assert_eq!(out.tax_amount, dec!(0));
        assert_eq!(out.net_maturity, dec!(500000));
        assert_eq!(out.net_gain, dec!(0));
        assert_eq!(out.net_gain_percent, dec!(0));
        assert_eq!(out.annualized_return_percent, dec!(0));
    }

    // -----------------------------------------------------------------------
    // 3. Zero tax: net maturity equals gross maturity
    // -----------------------------------------------------------------------
    #[test]
    fn test_zero_tax_net_equals_gross() {
        let out = compute_maturity(&params(dec!(150000), dec!(7.25), dec!(5), dec!(0)))
            .unwrap()
            .result;

        assert_eq!(out.tax_amount, dec!(0));
        assert_eq!(out.net_maturity, out.gross_maturity);
        assert_eq!(out.net_gain, out.total_interest);
    }

    // -----------------------------------------------------------------------
    // 4. Fractional tenure goes through the same exponent formula
    // -----------------------------------------------------------------------
    #[test]
    fn test_fractional_tenure() {
        let out = compute_maturity(&params(dec!(100000), dec!(10), dec!(0.5), dec!(10)))
            .unwrap()
            .result;

        // 100000 × 1.10^0.5 = 104880.88 → 104881
        assert_eq!(out.gross_maturity, dec!(104881));
        assert_eq!(out.total_interest, dec!(4881));
        // 4881 × 0.10 = 488.1 → 488
        assert_eq!(out.tax_amount, dec!(488));
        assert_eq!(out.net_maturity, dec!(104393));
    }

    // -----------------------------------------------------------------------
    // 5. Tax is charged on interest only, never on principal
    // -----------------------------------------------------------------------
    #[test]
    fn test_tax_applies_to_interest_only() {
        let out = compute_maturity(&params(dec!(100000), dec!(8), dec!(3), dec!(100)))
            .unwrap()
            .result;

        // Even at 100% tax the principal comes back intact
        assert_eq!(out.tax_amount, out.total_interest);
        assert_eq!(out.net_maturity, dec!(100000));
        assert_eq!(out.net_gain, dec!(0));
    }

    // -----------------------------------------------------------------------
    // 6. Determinism: identical inputs yield identical outputs
    // -----------------------------------------------------------------------
    #[test]
    fn test_determinism() {
        let input = params(dec!(750000), dec!(9.15), dec!(4), dec!(20));
        let a = compute_maturity(&input).unwrap().result;
        let b = compute_maturity(&input).unwrap().result;
        assert_eq!(a, b);
    }

    // -----------------------------------------------------------------------
    // 7. Monotonicity in the coupon rate
    // -----------------------------------------------------------------------
    #[test]
    fn test_rate_monotonicity() {
        let mut prev_gross = Decimal::MIN;
        let mut prev_net = Decimal::MIN;
        for rate in [dec!(2), dec!(4.5), dec!(6), dec!(8.6), dec!(12), dec!(20)] {
            let out = compute_maturity(&params(dec!(300000), rate, dec!(5), dec!(12.5)))
                .unwrap()
                .result;
            assert!(out.gross_maturity > prev_gross);
            assert!(out.net_maturity > prev_net);
            prev_gross = out.gross_maturity;
            prev_net = out.net_maturity;
        }
    }

    // -----------------------------------------------------------------------
    // 8. Invalid principal
    // -----------------------------------------------------------------------
    #[test]
    fn test_invalid_principal_error() {
        let result = compute_maturity(&params(dec!(0), dec!(8), dec!(2), dec!(10)));
        assert!(result.is_err());
        match result.unwrap_err() {
            BondReturnError::InvalidInput { field, .. } => assert_eq!(field, "principal"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    // -----------------------------------------------------------------------
    // 9. Invalid tenure
    // -----------------------------------------------------------------------
    #[test]
    fn test_invalid_tenure_error() {
        let result = compute_maturity(&params(dec!(10000), dec!(8), dec!(-1), dec!(10)));
        assert!(result.is_err());
        match result.unwrap_err() {
            BondReturnError::InvalidInput { field, .. } => assert_eq!(field, "tenure_years"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    // -----------------------------------------------------------------------
    // 10. Out-of-convention rates warn but do not fail
    // -----------------------------------------------------------------------
    #[test]
    fn test_soft_domain_warnings() {
        let out = compute_maturity(&params(dec!(10000), dec!(-2), dec!(3), dec!(110))).unwrap();
        assert_eq!(out.warnings.len(), 2);
        assert!(out.result.gross_maturity < dec!(10000));
    }

    // -----------------------------------------------------------------------
    // 11. Metadata populated
    // -----------------------------------------------------------------------
    #[test]
    fn test_metadata_populated() {
        let out = compute_maturity(&params(dec!(200000), dec!(8.6), dec!(2), dec!(12.5))).unwrap();
        assert!(out.methodology.contains("net return"));
        assert_eq!(out.metadata.precision, "rust_decimal_128bit");
        assert!(!out.metadata.version.is_empty());
    }
}
