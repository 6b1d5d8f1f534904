//! HTTP client for the SkyWatch backend API
//!
//! Three consumed endpoints, each a single request/response round trip with
//! no retry: the province list, the forecast for a named province, and the
//! storm track feature collection.

use crate::config::BackendConfig;
use crate::error::SkyWatchError;
use crate::models::{ForecastBundle, Province, StormFeatureCollection};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Error body returned by the backend on non-2xx forecast responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Backend operations consumed by the controllers.
///
/// Controllers are generic over this trait so tests can drive them with
/// stub backends.
#[async_trait]
pub trait WeatherApi {
    /// Fetch the full province list
    async fn list_provinces(&self) -> crate::Result<Vec<Province>>;

    /// Fetch the forecast bundle for a province by name
    async fn get_forecast(&self, province_name: &str) -> crate::Result<ForecastBundle>;

    /// Fetch the storm track feature collection
    async fn get_storm_track(&self) -> crate::Result<StormFeatureCollection>;
}

/// Reqwest-backed client for the backend API
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from backend configuration.
    ///
    /// The request timeout comes from the configured client; no per-call
    /// timeout logic exists beyond it.
    pub fn new(config: &BackendConfig) -> crate::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()
            .map_err(|e| SkyWatchError::network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> crate::Result<T> {
        debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| SkyWatchError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SkyWatchError::network(format!(
                "unexpected status {status} from {url}"
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| SkyWatchError::parse(e.to_string()))
    }
}

#[async_trait]
impl WeatherApi for ApiClient {
    async fn list_provinces(&self) -> crate::Result<Vec<Province>> {
        let url = format!("{}/api/provinces", self.base_url);
        self.get_json(&url).await
    }

    async fn get_forecast(&self, province_name: &str) -> crate::Result<ForecastBundle> {
        let url = format!(
            "{}/api/forecast?name={}",
            self.base_url,
            urlencoding::encode(province_name)
        );
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| SkyWatchError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // The backend reports failures as `{"error": "..."}`. Surface that
            // message when the body parses, otherwise fall back to the status.
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| format!("unexpected status {status}"));
            return Err(SkyWatchError::network(message));
        }

        response
            .json::<ForecastBundle>()
            .await
            .map_err(|e| SkyWatchError::parse(e.to_string()))
    }

    async fn get_storm_track(&self) -> crate::Result<StormFeatureCollection> {
        // An empty or feature-less collection passes through uninterpreted;
        // the map controller tolerates absence of features.
        let url = format!("{}/api/storm_track", self.base_url);
        self.get_json(&url).await
    }
}
