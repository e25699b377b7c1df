use async_trait::async_trait;

/// Source of the two raw text resources.
///
/// Each method is called once per load; implementations do not retry.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Raw flight deals table
    async fn fetch_flights(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;

    /// Raw airport reference table
    async fn fetch_airports(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;
}

/// In-memory source, for tests and fixtures.
#[derive(Debug, Clone, Default)]
pub struct StaticDataSource {
    pub flights: String,
    pub airports: String,
}

impl StaticDataSource {
    pub fn new(flights: impl Into<String>, airports: impl Into<String>) -> Self {
        Self {
            flights: flights.into(),
            airports: airports.into(),
        }
    }
}

#[async_trait]
impl DataSource for StaticDataSource {
    async fn fetch_flights(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.flights.clone())
    }

    async fn fetch_airports(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.airports.clone())
    }
}
