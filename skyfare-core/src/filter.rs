use serde::{Deserialize, Serialize};
use skyfare_shared::FlightRecord;

use crate::stats::FlightStats;
use crate::translate::Translator;

/// Inclusive `[min, max]` range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> Bounds<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Bounds<i64> {
    pub const UNBOUNDED: Self = Self { min: i64::MIN, max: i64::MAX };
}

impl Bounds<i32> {
    pub const UNBOUNDED: Self = Self { min: i32::MIN, max: i32::MAX };
}

/// User-controlled predicate over flight records.
///
/// Empty strings and `None` are both "no constraint". The default value
/// matches every record; [`FilterSpec::from_stats`] gives the initial state of
/// the filter controls once data is loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FilterSpec {
    pub search: String,
    pub country: Option<String>,
    pub city: Option<String>,
    pub price: Bounds<i64>,
    pub days: Bounds<i32>,
    pub outbound_part_of_day: Option<String>,
    pub return_part_of_day: Option<String>,
    pub outbound_weekday: Option<String>,
    pub return_weekday: Option<String>,
    pub direct_only: bool,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            search: String::new(),
            country: None,
            city: None,
            price: Bounds::<i64>::UNBOUNDED,
            days: Bounds::<i32>::UNBOUNDED,
            outbound_part_of_day: None,
            return_part_of_day: None,
            outbound_weekday: None,
            return_weekday: None,
            direct_only: false,
        }
    }
}

impl FilterSpec {
    /// No constraints, bounds set to the observed ranges.
    pub fn from_stats(stats: &FlightStats) -> Self {
        Self {
            price: stats.price_range,
            days: stats.days_range,
            ..Self::default()
        }
    }

    /// Whether anything narrows the result compared to [`FilterSpec::from_stats`].
    pub fn is_active(&self, stats: &FlightStats) -> bool {
        !self.search.is_empty()
            || constraint(&self.country).is_some()
            || constraint(&self.city).is_some()
            || constraint(&self.outbound_part_of_day).is_some()
            || constraint(&self.return_part_of_day).is_some()
            || constraint(&self.outbound_weekday).is_some()
            || constraint(&self.return_weekday).is_some()
            || self.direct_only
            || self.price.min > stats.price_range.min
            || self.price.max < stats.price_range.max
            || self.days.min > stats.days_range.min
            || self.days.max < stats.days_range.max
    }

    /// Every rule must hold. Never fails.
    pub fn matches<T>(&self, flight: &FlightRecord, translator: &T) -> bool
    where
        T: Translator + ?Sized,
    {
        if !self.search.is_empty() && !search_hit(&self.search, flight, translator) {
            return false;
        }

        if !exact(&self.country, &flight.country) || !exact(&self.city, &flight.city) {
            return false;
        }

        if !self.price.contains(flight.price) || !self.days.contains(flight.days) {
            return false;
        }

        if !exact(&self.outbound_part_of_day, &flight.outbound_part_of_day)
            || !exact(&self.return_part_of_day, &flight.return_part_of_day)
        {
            return false;
        }

        if !exact(&self.outbound_weekday, &flight.outbound_weekday)
            || !exact(&self.return_weekday, &flight.return_weekday)
        {
            return false;
        }

        !self.direct_only || flight.is_direct()
    }
}

/// Free-function form of [`FilterSpec::matches`].
pub fn matches<T>(flight: &FlightRecord, spec: &FilterSpec, translator: &T) -> bool
where
    T: Translator + ?Sized,
{
    spec.matches(flight, translator)
}

/// Records accepted by `spec`, in input order.
pub fn filter_records<'a, T>(
    flights: &'a [FlightRecord],
    spec: &FilterSpec,
    translator: &T,
) -> Vec<&'a FlightRecord>
where
    T: Translator + ?Sized,
{
    flights
        .iter()
        .filter(|flight| matches(flight, spec, translator))
        .collect()
}

fn constraint(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn exact(wanted: &Option<String>, actual: &str) -> bool {
    constraint(wanted).map_or(true, |w| w == actual)
}

// Case-insensitive substring over raw and translated city and country.
fn search_hit<T>(query: &str, flight: &FlightRecord, translator: &T) -> bool
where
    T: Translator + ?Sized,
{
    let query = query.to_lowercase();
    [
        flight.city.as_str(),
        translator.city(&flight.city),
        flight.country.as_str(),
        translator.country(&flight.country),
    ]
    .iter()
    .any(|candidate| candidate.to_lowercase().contains(&query))
}
