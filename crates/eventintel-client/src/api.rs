//! Client side of the discovery API.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use eventintel_common::{
    AttendeesEnvelope, DiscoverAttendeesRequest, DiscoverEventsRequest, EventsEnvelope,
};

use crate::error::ClientError;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

#[async_trait]
pub trait DiscoveryApi: Send + Sync {
    async fn discover_events(&self, req: &DiscoverEventsRequest)
        -> Result<EventsEnvelope, ClientError>;
    async fn discover_attendees(&self, req: &DiscoverAttendeesRequest)
        -> Result<AttendeesEnvelope, ClientError>;
}

/// JSON-over-HTTP implementation backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpDiscoveryApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDiscoveryApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ClientError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path);
        debug!("POST {url}");
        let resp = self.client.post(&url).json(body).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::HttpStatus(status.as_u16()));
        }
        Ok(resp.json::<R>().await?)
    }
}

impl Default for HttpDiscoveryApi {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

#[async_trait]
impl DiscoveryApi for HttpDiscoveryApi {
    async fn discover_events(
        &self,
        req: &DiscoverEventsRequest,
    ) -> Result<EventsEnvelope, ClientError> {
        self.post("discover-events", req).await
    }

    async fn discover_attendees(
        &self,
        req: &DiscoverAttendeesRequest,
    ) -> Result<AttendeesEnvelope, ClientError> {
        self.post("discover-attendees", req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        assert_eq!(HttpDiscoveryApi::new("http://api.test/api/").base_url(), "http://api.test/api");
    }

    #[test]
    fn test_default_points_at_local_service() {
        assert_eq!(HttpDiscoveryApi::default().base_url(), DEFAULT_API_BASE_URL);
    }
}
