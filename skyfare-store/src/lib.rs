pub mod app_config;
pub mod http_source;
pub mod loader;

pub use http_source::HttpDataSource;
pub use loader::{load_catalog, LoadError, Resource};
