pub mod error;
pub mod export;
pub mod maturity;
pub mod types;

pub use error::BondReturnError;
pub use types::*;

/// Standard result type for all bond-return operations
pub type BondReturnResult<T> = Result<T, BondReturnError>;
