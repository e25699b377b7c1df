use serde::{Deserialize, Serialize};

/// Latitude / longitude pair in degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Reference geodata for one airport
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AirportRecord {
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub continent: String,
    pub region: String,
    pub longitude: f64,
    pub latitude: f64,
    pub rank: i32,
}

impl AirportRecord {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            lat: self.latitude,
            lon: self.longitude,
        }
    }

    /// Rows with no code, or sitting exactly on (0, 0), are placeholders in
    /// the source data and are dropped.
    pub fn is_valid(&self) -> bool {
        !self.code.is_empty() && !(self.longitude == 0.0 && self.latitude == 0.0)
    }
}
