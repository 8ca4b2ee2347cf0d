//! Export surface for a completed calculation.
//!
//! Isolated from the computation module so the arithmetic stays unit-testable
//! without any presentation harness. Two targets: a compact JSON payload for
//! clipboard transfer, and a one-row CSV document for file download.

use serde::{Deserialize, Serialize};

use crate::maturity::{InvestmentParameters, MaturityResult};
use crate::types::{Money, Rate, Years};
use crate::BondReturnResult;

/// Column order of the CSV export. Fixed; consumers parse positionally.
pub const CSV_HEADER: [&str; 6] = [
    "Principal",
    "Rate",
    "Years",
    "Tax",
    "GrossMaturity",
    "NetMaturity",
];

/// The subset of inputs and outputs shared via the clipboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipboardPayload {
    pub principal: Money,
    pub rate: Rate,
    pub years: Years,
    pub tax: Rate,
    pub maturity: Money,
    pub net_maturity: Money,
}

/// Build the clipboard payload from a finished calculation.
pub fn clipboard_payload(
    params: &InvestmentParameters,
    result: &MaturityResult,
) -> ClipboardPayload {
    ClipboardPayload {
        principal: params.principal,
        rate: params.annual_rate_percent,
        years: params.tenure_years,
        tax: params.tax_rate_percent,
        maturity: result.gross_maturity,
        net_maturity: result.net_maturity,
    }
}

/// Serialize the clipboard payload as compact JSON text.
pub fn clipboard_text(
    params: &InvestmentParameters,
    result: &MaturityResult,
) -> BondReturnResult<String> {
    Ok(serde_json::to_string(&clipboard_payload(params, result))?)
}

/// The single data row matching [`CSV_HEADER`].
pub fn csv_row(params: &InvestmentParameters, result: &MaturityResult) -> [String; 6] {
    [
        params.principal.to_string(),
        params.annual_rate_percent.to_string(),
        params.tenure_years.to_string(),
        params.tax_rate_percent.to_string(),
        result.gross_maturity.to_string(),
        result.net_maturity.to_string(),
    ]
}
