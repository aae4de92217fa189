//! Primitive Type Errors

use thiserror::Error;

/// Error while constructing or parsing a primitive
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypesError {
    #[error("Malformed year-month {0:?}, expected YYYY-MM")]
    MalformedYearMonth(String),

    #[error("Month out of range: {0}")]
    MonthOutOfRange(u32),
}

/// Result type for primitive operations
pub type TypesResult<T> = Result<T, TypesError>;
