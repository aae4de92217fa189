//! Pool Errors

use thiserror::Error;

use lib_types::{Coins, YearMonth};

/// Error during pool accrual or storage
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    #[error("Pool {0} is closed")]
    Closed(YearMonth),

    #[error("Budget ceiling exceeded: ceiling {ceiling}, would have {would_have}")]
    BudgetExceeded { ceiling: Coins, would_have: Coins },

    #[error("Arithmetic overflow")]
    Overflow,

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type for pool operations
pub type PoolResult<T> = Result<T, PoolError>;
