use skyfare_shared::FlightRecord;

use crate::airports::AirportIndex;
use crate::decode::{decode_airports, decode_flights};
use crate::stats::FlightStats;

/// Everything loaded at startup. Built once and never mutated.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    flights: Vec<FlightRecord>,
    airports: AirportIndex,
    stats: FlightStats,
}

impl Catalog {
    pub fn new(flights: Vec<FlightRecord>, airports: AirportIndex) -> Self {
        let stats = FlightStats::from_records(&flights);
        Self {
            flights,
            airports,
            stats,
        }
    }

    /// Decode both raw tables.
    pub fn decode(flights_text: &str, airports_text: &str) -> Self {
        Self::new(decode_flights(flights_text), decode_airports(airports_text))
    }

    pub fn flights(&self) -> &[FlightRecord] {
        &self.flights
    }

    pub fn airports(&self) -> &AirportIndex {
        &self.airports
    }

    pub fn stats(&self) -> &FlightStats {
        &self.stats
    }
}
