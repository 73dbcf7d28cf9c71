pub mod error;
pub mod types;
pub mod validation;
pub mod valuation;

pub use error::BondCalcError;
pub use types::*;

/// Standard result type for all bondcalc operations
pub type BondCalcResult<T> = Result<T, BondCalcError>;
