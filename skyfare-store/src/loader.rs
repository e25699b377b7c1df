use skyfare_core::{Catalog, DataSource};
use std::fmt;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Flights,
    Airports,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Flights => f.write_str("flight data"),
            Resource::Airports => f.write_str("airport data"),
        }
    }
}

/// Startup load failure. Terminal: no retry, no partial catalog.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to load {resource}: {message}")]
    Fetch { resource: Resource, message: String },
}

impl LoadError {
    pub fn resource(&self) -> Resource {
        match self {
            LoadError::Fetch { resource, .. } => *resource,
        }
    }
}

/// Fetch both tables concurrently, once, and decode them into a [`Catalog`].
pub async fn load_catalog<S>(source: &S) -> Result<Catalog, LoadError>
where
    S: DataSource + ?Sized,
{
    info!("Loading flight and airport data");

    let (flights, airports) = tokio::try_join!(
        async {
            source.fetch_flights().await.map_err(|e| LoadError::Fetch {
                resource: Resource::Flights,
                message: e.to_string(),
            })
        },
        async {
            source.fetch_airports().await.map_err(|e| LoadError::Fetch {
                resource: Resource::Airports,
                message: e.to_string(),
            })
        },
    )
    .inspect_err(|e| error!("{}", e))?;

    let catalog = Catalog::decode(&flights, &airports);
    info!(
        flights = catalog.flights().len(),
        airports = catalog.airports().len(),
        "Catalog loaded"
    );

    Ok(catalog)
}
