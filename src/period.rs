//! Calendar month labels for ledger rows

use chrono::{Datelike, Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

/// A calendar year-month, stored as the first day of that month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    /// Build from a year and a 1-based month; `None` if the month is out of range
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(YearMonth)
    }

    /// The month containing `date`
    pub fn from_date(date: NaiveDate) -> Self {
        YearMonth(date.with_day(1).unwrap_or(date))
    }

    /// The month of the local clock at the time of the call
    pub fn current() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    /// Step forward `months` calendar months, rolling over year boundaries.
    /// Returns `None` past chrono's representable range.
    pub fn add_months(&self, months: u32) -> Option<Self> {
        self.0.checked_add_months(Months::new(months)).map(YearMonth)
    }

    pub fn succ(&self) -> Option<Self> {
        self.add_months(1)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m"))
    }
}

impl FromStr for YearMonth {
    type Err = CalcError;

    /// Accepts `YYYY-MM` or a full `YYYY-MM-DD` date (the day is dropped)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parsed = match s.len() {
            7 => NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d"),
            _ => NaiveDate::parse_from_str(s, "%Y-%m-%d"),
        };
        parsed
            .map(Self::from_date)
            .map_err(|e| CalcError::Parse(format!("invalid year-month '{}': {}", s, e)))
    }
}

impl TryFrom<String> for YearMonth {
    type Error = CalcError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}
