pub mod models;

pub use models::airport::{AirportRecord, Coordinates};
pub use models::flight::FlightRecord;
