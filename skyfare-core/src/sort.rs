use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use skyfare_shared::FlightRecord;

use crate::CoreError;

/// Ordering applied to the list view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    #[serde(rename = "price-asc")]
    PriceAsc,
    #[serde(rename = "price-desc")]
    PriceDesc,
    #[serde(rename = "date-asc")]
    DateAsc,
    #[serde(rename = "date-desc")]
    DateDesc,
    #[serde(rename = "days-asc")]
    DaysAsc,
    #[serde(rename = "days-desc")]
    DaysDesc,
}

impl SortMode {
    pub const ALL: [SortMode; 6] = [
        SortMode::PriceAsc,
        SortMode::PriceDesc,
        SortMode::DateAsc,
        SortMode::DateDesc,
        SortMode::DaysAsc,
        SortMode::DaysDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::PriceAsc => "price-asc",
            SortMode::PriceDesc => "price-desc",
            SortMode::DateAsc => "date-asc",
            SortMode::DateDesc => "date-desc",
            SortMode::DaysAsc => "days-asc",
            SortMode::DaysDesc => "days-desc",
        }
    }

    /// Total order over two records for this mode.
    pub fn compare(&self, a: &FlightRecord, b: &FlightRecord) -> Ordering {
        match self {
            SortMode::PriceAsc => a.price.cmp(&b.price),
            SortMode::PriceDesc => b.price.cmp(&a.price),
            SortMode::DateAsc => compare_dates(&a.outbound_date, &b.outbound_date, false),
            SortMode::DateDesc => compare_dates(&a.outbound_date, &b.outbound_date, true),
            SortMode::DaysAsc => a.days.cmp(&b.days),
            SortMode::DaysDesc => b.days.cmp(&a.days),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| CoreError::ValidationError(format!("unknown sort mode: {s}")))
    }
}

/// Return a newly ordered copy of `flights`. The sort is stable: records with
/// equal keys keep their input order.
pub fn sort_records<'a, I>(flights: I, mode: SortMode) -> Vec<&'a FlightRecord>
where
    I: IntoIterator<Item = &'a FlightRecord>,
{
    let mut sorted: Vec<&FlightRecord> = flights.into_iter().collect();
    sorted.sort_by(|a, b| mode.compare(a, b));
    sorted
}

/// Parse the calendar-date part of a date cell.
///
/// Accepts `YYYY-MM-DD`, optionally followed by a time part separated by `T`
/// or a space.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let date_part = value.split(['T', ' ']).next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

// Unparsable dates go after every valid date regardless of direction.
fn compare_dates(a: &str, b: &str, descending: bool) -> Ordering {
    match (parse_date(a), parse_date(b)) {
        (Some(a), Some(b)) if descending => b.cmp(&a),
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
