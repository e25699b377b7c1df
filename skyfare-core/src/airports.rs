use std::collections::{BTreeSet, HashMap};

use serde::Serialize;
use skyfare_shared::AirportRecord;

/// Immutable airport lookup keyed by code.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AirportIndex {
    airports: HashMap<String, AirportRecord>,
}

impl AirportIndex {
    /// Build the index. A later record with the same code replaces the earlier one.
    pub fn from_records(records: impl IntoIterator<Item = AirportRecord>) -> Self {
        let mut airports = HashMap::new();
        for record in records {
            airports.insert(record.code.clone(), record);
        }
        Self { airports }
    }

    pub fn get(&self, code: &str) -> Option<&AirportRecord> {
        self.airports.get(code)
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// Distinct non-empty continents, sorted.
    pub fn continents(&self) -> Vec<String> {
        self.distinct(|a| &a.continent)
    }

    /// Distinct non-empty regions, sorted.
    pub fn regions(&self) -> Vec<String> {
        self.distinct(|a| &a.region)
    }

    fn distinct<F>(&self, field: F) -> Vec<String>
    where
        F: Fn(&AirportRecord) -> &String,
    {
        self.airports
            .values()
            .map(field)
            .filter(|v| !v.is_empty())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
