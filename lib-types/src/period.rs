//! Accounting Periods
//!
//! Pools accumulate per calendar month. The canonical text form is `YYYY-MM`,
//! which is also the storage key.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{TypesError, TypesResult};

/// Calendar month key for a reward pool
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Create a period, rejecting months outside 1..=12
    pub fn new(year: i32, month: u32) -> TypesResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(TypesError::MonthOutOfRange(month));
        }
        Ok(Self { year, month })
    }

    /// Period containing the given date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Period containing the current UTC instant
    pub fn current() -> Self {
        Self::from_date(Utc::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = TypesError;

    fn from_str(s: &str) -> TypesResult<Self> {
        let malformed = || TypesError::MalformedYearMonth(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(malformed)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(malformed());
        }
        let year: i32 = year.parse().map_err(|_| malformed())?;
        let month: u32 = month.parse().map_err(|_| malformed())?;

        Self::new(year, month)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = TypesError;

    fn try_from(value: String) -> TypesResult<Self> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(period: YearMonth) -> Self {
        period.to_string()
    }
}
