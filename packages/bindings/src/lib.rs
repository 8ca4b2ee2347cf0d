use napi::Result as NapiResult;
use napi_derive::napi;

use bond_return_core::export;
use bond_return_core::maturity::{self, InvestmentParameters};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Compute gross/net maturity and after-tax returns. JSON in, JSON out:
/// the web front end owns the input state and calls this on every change.
#[napi]
pub fn compute_maturity(input_json: String) -> NapiResult<String> {
    let input: InvestmentParameters = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = maturity::compute_maturity(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Build the compact clipboard payload for a set of parameters.
#[napi]
pub fn export_payload(input_json: String) -> NapiResult<String> {
    let input: InvestmentParameters = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = maturity::compute_maturity(&input).map_err(to_napi_error)?;
    export::clipboard_text(&input, &output.result).map_err(to_napi_error)
}
