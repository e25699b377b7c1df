use serde::{Deserialize, Serialize};

/// One priced round-trip offer from the deals table.
///
/// Field order matches the column order of the source file; see
/// `skyfare_core::decode::decode_flights`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FlightRecord {
    pub city: String,
    pub price: i64,
    pub days: i32,
    pub country: String,

    pub outbound_date: String,
    pub outbound_weekday: String,
    pub outbound_time: String,
    pub outbound_part_of_day: String,

    pub return_date: String,
    pub return_weekday: String,
    pub return_time: String,
    pub return_part_of_day: String,

    pub outbound_transfers: i32,
    pub return_transfers: i32,

    /// Destination airport code, key into the airport reference table
    pub airport_code: String,

    /// Booking deep link. May contain unescaped commas after the scheme.
    pub link: String,
}

impl FlightRecord {
    /// A record without a destination city or with a non-positive price is
    /// never kept.
    pub fn is_valid(&self) -> bool {
        !self.city.is_empty() && self.price > 0
    }

    /// No transfers in either direction.
    pub fn is_direct(&self) -> bool {
        self.outbound_transfers == 0 && self.return_transfers == 0
    }
}
