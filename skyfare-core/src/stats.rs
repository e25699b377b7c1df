use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use skyfare_shared::FlightRecord;

use crate::filter::Bounds;

/// Price range reported when there is no data to observe.
pub const FALLBACK_PRICE_RANGE: Bounds<i64> = Bounds { min: 0, max: 100_000 };

/// Trip-length range reported when there is no data to observe.
pub const FALLBACK_DAYS_RANGE: Bounds<i32> = Bounds { min: 1, max: 30 };

/// Facets observed across the loaded flights; drives filter defaults and the
/// option lists of the filter controls.
///
/// `countries` and `cities` hold raw values in byte order. Display order by
/// translated label is locale dependent and left to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlightStats {
    /// Raw values, byte order
    pub countries: Vec<String>,
    /// Raw values, byte order
    pub cities: Vec<String>,
    pub price_range: Bounds<i64>,
    pub days_range: Bounds<i32>,
    /// Outbound and return tags together, sorted
    pub parts_of_day: Vec<String>,
    /// Outbound and return weekdays together, in first-seen order
    pub weekdays: Vec<String>,
}

impl FlightStats {
    pub fn from_records(flights: &[FlightRecord]) -> Self {
        let (Some(min_price), Some(max_price)) = (
            flights.iter().map(|f| f.price).min(),
            flights.iter().map(|f| f.price).max(),
        ) else {
            return Self::empty();
        };

        let min_days = flights.iter().map(|f| f.days).min().unwrap_or(FALLBACK_DAYS_RANGE.min);
        let max_days = flights.iter().map(|f| f.days).max().unwrap_or(FALLBACK_DAYS_RANGE.max);

        let countries = sorted_distinct(flights.iter().map(|f| &f.country));
        let cities = sorted_distinct(flights.iter().map(|f| &f.city));

        let parts_of_day = sorted_distinct(
            flights
                .iter()
                .map(|f| &f.outbound_part_of_day)
                .chain(flights.iter().map(|f| &f.return_part_of_day))
                .filter(|v| !v.is_empty()),
        );

        let mut weekdays: Vec<String> = Vec::new();
        for day in flights
            .iter()
            .map(|f| &f.outbound_weekday)
            .chain(flights.iter().map(|f| &f.return_weekday))
        {
            if !day.is_empty() && !weekdays.contains(day) {
                weekdays.push(day.clone());
            }
        }

        Self {
            countries,
            cities,
            price_range: Bounds::new(min_price, max_price),
            days_range: Bounds::new(min_days, max_days),
            parts_of_day,
            weekdays,
        }
    }

    pub fn empty() -> Self {
        Self {
            countries: Vec::new(),
            cities: Vec::new(),
            price_range: FALLBACK_PRICE_RANGE,
            days_range: FALLBACK_DAYS_RANGE,
            parts_of_day: Vec::new(),
            weekdays: Vec::new(),
        }
    }
}

impl Default for FlightStats {
    fn default() -> Self {
        Self::empty()
    }
}

fn sorted_distinct<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
    values
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
