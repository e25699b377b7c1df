use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use skyfare_shared::{Coordinates, FlightRecord};

use crate::airports::AirportIndex;
use crate::filter::Bounds;

/// Departure point drawn on the map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Origin {
    pub name: String,
    pub coordinates: Coordinates,
}

impl Default for Origin {
    fn default() -> Self {
        Self {
            name: "Budapest".to_string(),
            coordinates: Coordinates { lat: 47.4298, lon: 19.2611 },
        }
    }
}

/// Flights to one airport, positioned with the airport's reference data.
#[derive(Debug, Clone, Serialize)]
pub struct Destination<'a> {
    pub code: String,
    pub city: String,
    pub country: String,
    pub continent: String,
    pub region: String,
    pub coordinates: Coordinates,
    pub min_price: i64,
    pub count: usize,
    pub records: Vec<&'a FlightRecord>,
}

/// Aggregate `flights` per destination airport.
///
/// Flights whose airport code is missing from `airports` cannot be placed and
/// are left out. Output is cheapest first; ties keep first-seen order.
pub fn destinations<'a, I>(flights: I, airports: &AirportIndex) -> Vec<Destination<'a>>
where
    I: IntoIterator<Item = &'a FlightRecord>,
{
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    let mut out: Vec<Destination<'a>> = Vec::new();

    for flight in flights {
        let code = flight.airport_code.as_str();
        let idx = match positions.get(code) {
            Some(idx) => *idx,
            None => {
                let Some(airport) = airports.get(code) else {
                    continue;
                };
                out.push(Destination {
                    code: airport.code.clone(),
                    city: airport.city.clone(),
                    country: airport.country.clone(),
                    continent: airport.continent.clone(),
                    region: airport.region.clone(),
                    coordinates: airport.coordinates(),
                    min_price: flight.price,
                    count: 0,
                    records: Vec::new(),
                });
                positions.insert(code, out.len() - 1);
                out.len() - 1
            }
        };

        let dest = &mut out[idx];
        dest.min_price = dest.min_price.min(flight.price);
        dest.count += 1;
        dest.records.push(flight);
    }

    out.sort_by_key(|d| d.min_price);
    out
}

/// Distinct non-empty continents among `dests`, sorted.
pub fn continents(dests: &[Destination<'_>]) -> Vec<String> {
    dests
        .iter()
        .map(|d| &d.continent)
        .filter(|c| !c.is_empty())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Whether `dest` passes the continent filter; empty or `"all"` passes everything.
pub fn in_continent(dest: &Destination<'_>, continent: &str) -> bool {
    continent.is_empty() || continent == "all" || dest.continent == continent
}

/// Lowest and highest destination minimum price.
pub fn price_span(dests: &[Destination<'_>]) -> Option<Bounds<i64>> {
    let min = dests.iter().map(|d| d.min_price).min()?;
    let max = dests.iter().map(|d| d.min_price).max()?;
    Some(Bounds::new(min, max))
}

/// Relative price band of a destination, used for marker colour.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    Cheap,
    Medium,
    Expensive,
}

impl PriceTier {
    /// Position of `price` within `span`: lower third cheap, middle third
    /// medium, rest expensive. A zero-width span is cheap.
    pub fn classify(price: i64, span: Bounds<i64>) -> Self {
        let width = span.max - span.min;
        if width <= 0 {
            return PriceTier::Cheap;
        }

        let ratio = (price - span.min) as f64 / width as f64;
        if ratio < 0.33 {
            PriceTier::Cheap
        } else if ratio < 0.66 {
            PriceTier::Medium
        } else {
            PriceTier::Expensive
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MarkerSize {
    Small,
    Medium,
    Large,
}

impl MarkerSize {
    pub fn for_count(count: usize) -> Self {
        if count > 50 {
            MarkerSize::Large
        } else if count > 20 {
            MarkerSize::Medium
        } else {
            MarkerSize::Small
        }
    }
}
