//! Decoding and derived views over the flight deals feed.
//!
//! Raw text goes through [`decode`] once; everything after that ([`filter`],
//! [`sort`], [`group`], [`map`], [`view`]) is a pure function of the decoded
//! records and the caller's request.

pub use skyfare_shared::{AirportRecord, Coordinates, FlightRecord};

pub mod airports;
pub mod catalog;
pub mod decode;
pub mod filter;
pub mod group;
pub mod map;
pub mod repository;
pub mod sort;
pub mod stats;
pub mod translate;
pub mod view;

pub use airports::AirportIndex;
pub use catalog::Catalog;
pub use filter::{filter_records, matches, Bounds, FilterSpec};
pub use group::{group_by, Group, GroupKey};
pub use map::{destinations, Destination, Origin};
pub use repository::{DataSource, StaticDataSource};
pub use sort::{sort_records, SortMode};
pub use stats::FlightStats;
pub use translate::{StaticTranslations, Translator};
pub use view::{compose_view, View, ViewMode, ViewRequest, ViewSettings};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
