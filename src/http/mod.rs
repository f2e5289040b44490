pub mod error;
pub mod model;

use async_trait::async_trait;
use reqwest::Url;
use tracing::debug;

use self::{
    error::SearchError,
    model::{Track, decode_tracks},
};

pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://api.spotify.com/v1/search";

#[async_trait]
pub trait SearchClient: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<Track>, SearchError>;
}

pub struct SpotifyClient {
    pub client: reqwest::Client,
    endpoint: String,
}

impl SpotifyClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Builds `{endpoint}?type=track&q=<query>` with the query percent-encoded.
    pub fn search_url(&self, query: &str) -> Result<Url, SearchError> {
        let mut url = Url::parse_with_params(&self.endpoint, &[("type", "track"), ("q", query)])
            .map_err(|e| SearchError::Endpoint(e.to_string()))?;

        // Form encoding writes spaces as `+` and a literal `+` as `%2B`.
        let encoded = url.query().map(|q| q.replace('+', "%20"));
        url.set_query(encoded.as_deref());
        Ok(url)
    }
}

#[async_trait]
impl SearchClient for SpotifyClient {
    async fn search(&self, query: &str) -> Result<Vec<Track>, SearchError> {
        let url = self.search_url(query)?;
        debug!(%url, "Searching catalog");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        decode_tracks(&body)
    }
}
