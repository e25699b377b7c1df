use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use skyfare_shared::FlightRecord;

use crate::sort::{sort_records, SortMode};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GroupKey {
    Country,
    City,
}

impl GroupKey {
    /// Raw (untranslated) value of this attribute on `flight`.
    pub fn value_of<'a>(&self, flight: &'a FlightRecord) -> &'a str {
        match self {
            GroupKey::Country => &flight.country,
            GroupKey::City => &flight.city,
        }
    }
}

/// Records sharing one country or city value.
#[derive(Debug, Clone, Serialize)]
pub struct Group<'a> {
    pub key: String,
    /// Country of the first member; only set for city groups.
    pub country: Option<String>,
    pub min_price: i64,
    pub count: usize,
    /// Members in input order
    pub records: Vec<&'a FlightRecord>,
}

impl<'a> Group<'a> {
    /// Members cheapest first, for display.
    pub fn records_by_price(&self) -> Vec<&'a FlightRecord> {
        sort_records(self.records.iter().copied(), SortMode::PriceAsc)
    }
}

/// Partition `flights` by `key`.
///
/// Groups come out cheapest first (by their minimum price); groups with equal
/// minimum keep the order in which their key was first seen.
pub fn group_by<'a, I>(flights: I, key: GroupKey) -> Vec<Group<'a>>
where
    I: IntoIterator<Item = &'a FlightRecord>,
{
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    let mut groups: Vec<Group<'a>> = Vec::new();

    for flight in flights {
        let value = key.value_of(flight);
        let idx = *positions.entry(value).or_insert_with(|| {
            groups.push(Group {
                key: value.to_string(),
                country: match key {
                    GroupKey::City => Some(flight.country.clone()),
                    GroupKey::Country => None,
                },
                min_price: flight.price,
                count: 0,
                records: Vec::new(),
            });
            groups.len() - 1
        });

        let group = &mut groups[idx];
        group.min_price = group.min_price.min(flight.price);
        group.count += 1;
        group.records.push(flight);
    }

    groups.sort_by_key(|g| g.min_price);
    groups
}
