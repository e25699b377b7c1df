use async_trait::async_trait;
use skyfare_core::DataSource;
use std::error::Error;
use tracing::info;

use crate::app_config::SourcesConfig;

/// Reads both tables over HTTP(S). One request per call, no retry, no timeout.
#[derive(Clone)]
pub struct HttpDataSource {
    client: reqwest::Client,
    flights_url: String,
    airports_url: String,
}

impl HttpDataSource {
    pub fn new(sources: &SourcesConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            flights_url: sources.flights_url.clone(),
            airports_url: sources.airports_url.clone(),
        }
    }

    async fn get_text(&self, url: &str) -> Result<String, Box<dyn Error + Send + Sync>> {
        let resp = self.client.get(url).send().await?.error_for_status()?;
        let text = resp.text().await?;
        info!("Fetched {} bytes from {}", text.len(), url);
        Ok(text)
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    async fn fetch_flights(&self) -> Result<String, Box<dyn Error + Send + Sync>> {
        self.get_text(&self.flights_url).await
    }

    async fn fetch_airports(&self) -> Result<String, Box<dyn Error + Send + Sync>> {
        self.get_text(&self.airports_url).await
    }
}
