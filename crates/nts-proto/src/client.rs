//! HTTP access to the NTS public API.
//!
//! Every call is a single unauthenticated GET with no retry. Failures are
//! classified by [`FetchError::kind`] so callers can tell a flaky connection
//! apart from an API change.

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::model::{BroadcastDocument, MixtapeCatalog, MixtapeEntry};

pub struct NtsClient {
    http: reqwest::Client,
    live_url: String,
    mixtapes_url: String,
}

impl NtsClient {
    pub fn new(api: &ApiConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(api.user_agent.as_str())
            .build()
            .map_err(|e| FetchError::from_reqwest(&api.live_url, e))?;
        Ok(Self {
            http,
            live_url: api.live_url.clone(),
            mixtapes_url: api.mixtapes_url.clone(),
        })
    }

    /// The live document exactly as upstream sent it.
    pub async fn fetch_live_raw(&self) -> Result<Value, FetchError> {
        self.get_json(&self.live_url).await
    }

    pub async fn fetch_live(&self) -> Result<BroadcastDocument, FetchError> {
        let raw = self.fetch_live_raw().await?;
        let doc: BroadcastDocument =
            serde_json::from_value(raw).map_err(|source| FetchError::Decode {
                url: self.live_url.clone(),
                source,
            })?;
        info!("[live] {} channel(s)", doc.channels.len());
        Ok(doc)
    }

    pub async fn fetch_catalog(&self) -> Result<Vec<MixtapeEntry>, FetchError> {
        let raw = self.get_json(&self.mixtapes_url).await?;
        let catalog: MixtapeCatalog =
            serde_json::from_value(raw).map_err(|source| FetchError::Decode {
                url: self.mixtapes_url.clone(),
                source,
            })?;
        info!("[mixtapes] {} stream(s)", catalog.results.len());
        Ok(catalog.results)
    }

    /// Raw bytes of an arbitrary URL (cover art).
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;
        check_status(url, &response)?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;
        Ok(bytes.to_vec())
    }

    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                warn!("request to {} failed: {}", url, e);
                FetchError::from_reqwest(url, e)
            })?;
        check_status(url, &response)?;

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;
        serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

fn check_status(url: &str, response: &reqwest::Response) -> Result<(), FetchError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    warn!("{} returned {}", url, status);
    Err(FetchError::Status {
        url: url.to_string(),
        status: status.as_u16(),
    })
}
