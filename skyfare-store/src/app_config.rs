use serde::Deserialize;
use skyfare_core::map::Origin;
use skyfare_core::view::{ViewSettings, DEFAULT_PAGE_SIZE};
use skyfare_core::Coordinates;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub sources: SourcesConfig,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub map: MapConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Where the two raw tables are read from
#[derive(Debug, Deserialize, Clone)]
pub struct SourcesConfig {
    pub flights_url: String,
    pub airports_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ViewConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self { page_size: default_page_size() }
    }
}

fn default_page_size() -> usize { DEFAULT_PAGE_SIZE }

#[derive(Debug, Deserialize, Clone)]
pub struct MapConfig {
    #[serde(default = "default_origin_name")]
    pub origin_name: String,
    #[serde(default = "default_origin_lat")]
    pub origin_lat: f64,
    #[serde(default = "default_origin_lon")]
    pub origin_lon: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            origin_name: default_origin_name(),
            origin_lat: default_origin_lat(),
            origin_lon: default_origin_lon(),
        }
    }
}

fn default_origin_name() -> String { Origin::default().name }
fn default_origin_lat() -> f64 { Origin::default().coordinates.lat }
fn default_origin_lon() -> f64 { Origin::default().coordinates.lon }

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Base settings, checked in
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `SKYFARE_SERVER__PORT=8080` sets `server.port`
            .add_source(config::Environment::with_prefix("SKYFARE").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Parse a single TOML document, without file or environment layering.
    pub fn from_toml(text: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(text, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    pub fn view_settings(&self) -> ViewSettings {
        ViewSettings {
            page_size: self.view.page_size,
            origin: Origin {
                name: self.map.origin_name.clone(),
                coordinates: Coordinates {
                    lat: self.map.origin_lat,
                    lon: self.map.origin_lon,
                },
            },
        }
    }
}
