pub mod export;
pub mod maturity;
