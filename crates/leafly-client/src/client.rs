//! HTTP client for the Leafly directory.
//!
//! Each search is a single POST with a JSON body and the `app_id`/`app_key` headers. No retry or
//! timeout override: a failed call ends that one chat interaction.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, info, instrument};

use crate::config::LeaflyConfig;
use crate::error::{LeaflyError, Result};
use crate::format::{format_store, format_strain};
use crate::models::{LocationsResponse, StrainsResponse};
use crate::query::{build_location_query, build_strain_query, TAKE};

/// Strain and store lookups, already rendered as text. Handlers depend on this trait; tests substitute stubs.
#[async_trait]
pub trait Directory: Send + Sync {
    /// `Err` means the directory could not be reached or answered badly; `Ok(vec![])` means no match.
    async fn search_strains(&self, text: &str) -> Result<Vec<String>>;

    /// Stores near the point. Failures are logged and reported as no stores.
    async fn search_locations(&self, latitude: f64, longitude: f64) -> Vec<String>;
}

/// [`Directory`] backed by the Leafly data API.
#[derive(Debug, Clone)]
pub struct LeaflyClient {
    client: Client,
    config: LeaflyConfig,
}

impl LeaflyClient {
    pub fn new(config: LeaflyConfig) -> Result<Self> {
        config.validate()?;
        let client = Client::builder().build()?;
        Ok(Self { client, config })
    }

    /// POSTs `body` and decodes a 200 response. Any other status is [`LeaflyError::Status`].
    async fn post<B, T>(&self, url: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        debug!(url = %url, "step: Leafly request");

        let response = self
            .client
            .post(url)
            .header("app_id", &self.config.app_id)
            .header("app_key", &self.config.app_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(LeaflyError::Status { status, body });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl Directory for LeaflyClient {
    #[instrument(skip(self))]
    async fn search_strains(&self, text: &str) -> Result<Vec<String>> {
        let query = build_strain_query(text);
        let res: StrainsResponse = match self.post(&self.config.strains_url(), &query).await {
            Ok(res) => res,
            Err(e) => {
                match &e {
                    LeaflyError::Status { status, .. } => {
                        error!(status = status.as_u16(), query = %text, "leafly returned {} for '{}'", status.as_u16(), text)
                    }
                    other => error!(error = %other, query = %text, "leafly strain search failed"),
                }
                return Err(e);
            }
        };

        let strains: Vec<String> = res
            .strains
            .iter()
            .take(TAKE as usize)
            .map(format_strain)
            .collect();
        info!(query = %text, count = strains.len(), "step: Leafly strain search done");
        Ok(strains)
    }

    #[instrument(skip(self))]
    async fn search_locations(&self, latitude: f64, longitude: f64) -> Vec<String> {
        let query = build_location_query(latitude, longitude);
        match self
            .post::<_, LocationsResponse>(&self.config.locations_url(), &query)
            .await
        {
            Ok(res) => {
                let stores: Vec<String> = res
                    .stores
                    .iter()
                    .take(TAKE as usize)
                    .map(format_store)
                    .collect();
                info!(count = stores.len(), "step: Leafly location search done");
                stores
            }
            Err(LeaflyError::Status { status, .. }) => {
                error!(status = status.as_u16(), "leafly returned {} for locations", status.as_u16());
                Vec::new()
            }
            Err(e) => {
                error!(error = %e, "leafly location search failed");
                Vec::new()
            }
        }
    }
}
