//! A thin `reqwest`-based client with a fixed 10s timeout, mirroring
//! `original_source/gateway-service/pkg/client/http_client.go`'s
//! `NewHttpClient(timeout)` used by both PD's KM client and GW's KM/PD
//! clients.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::AppError;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A `reqwest::Client` pinned to one base URL with a 10s timeout, reused
/// across requests (spec.md §4.2 step 1, §4.3 steps 1 and 3: the client is
/// constructed once at startup, not per-request).
#[derive(Clone, Debug)]
pub struct ServiceClient {
    base_url: String,
    client: reqwest::Client,
}

impl ServiceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("reqwest client with a fixed timeout always builds");
        ServiceClient {
            base_url: base_url.into(),
            client,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let url = self.url(path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Unavailable(format!("request to {url} failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::Unavailable(format!(
                "{url} returned status {}",
                response.status()
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Unavailable(format!("malformed response from {url}: {e}")))
    }

    pub async fn post_json<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        path: &str,
        body: &Req,
    ) -> Result<Resp, AppError> {
        let url = self.url(path);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::Unavailable(format!("request to {url} failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::Unavailable(format!(
                "{url} returned status {}",
                response.status()
            )));
        }

        response
            .json::<Resp>()
            .await
            .map_err(|e| AppError::Unavailable(format!("malformed response from {url}: {e}")))
    }
}
