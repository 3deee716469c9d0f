//! HTTP client for the plan endpoint
//!
//! One request per submission: no retries, no client-side timeout. An
//! unbounded hang on the backend keeps the submission in flight until the
//! underlying connection settles or errors.

use url::Url;

use crate::common::prelude::*;

use super::protocol::{ErrorBody, PlanRequest, PlanResponse};

/// Default backend base URL (overridable via config or `--base-url`)
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

const PLAN_PATH: &str = "api/get-plan";

/// Thin client owning the backend base URL
#[derive(Debug, Clone)]
pub struct PlanClient {
    base_url: Url,
    http: reqwest::Client,
}

impl PlanClient {
    /// Create a client for the given base URL
    pub fn new(base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url.trim().trim_end_matches('/')).map_err(|_| {
            Error::InvalidBaseUrl {
                url: base_url.to_string(),
            }
        })?;

        Ok(Self {
            base_url: parsed,
            http: reqwest::Client::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self) -> Result<Url> {
        // Url::join drops the last path segment unless the base ends in '/'
        let base = format!("{}/", self.base_url.as_str().trim_end_matches('/'));
        Url::parse(&base)
            .and_then(|b| b.join(PLAN_PATH))
            .map_err(|_| Error::InvalidBaseUrl {
                url: self.base_url.to_string(),
            })
    }

    /// Send one `POST /api/get-plan` and parse the response.
    ///
    /// Failure taxonomy: transport (request never settled), HTTP (non-2xx,
    /// carrying the server's `error` string when present), decode
    /// (unparseable success body).
    pub async fn fetch_plan(&self, request: &PlanRequest) -> Result<PlanResponse> {
        let url = self.endpoint()?;
        debug!("POST {}", url);

        let response = self
            .http
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&bytes)
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| format!("HTTP error! Status: {}", status.as_u16()));
            warn!("Plan request failed with status {}: {}", status, message);
            return Err(Error::Http {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| Error::decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_garbage_url() {
        assert!(matches!(
            PlanClient::new("not a url"),
            Err(Error::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_endpoint_joins_plan_path() {
        let client = PlanClient::new("http://localhost:5000").unwrap();
        assert_eq!(
            client.endpoint().unwrap().as_str(),
            "http://localhost:5000/api/get-plan"
        );
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let client = PlanClient::new("http://localhost:5000/").unwrap();
        assert_eq!(
            client.endpoint().unwrap().as_str(),
            "http://localhost:5000/api/get-plan"
        );
    }

    #[test]
    fn test_default_base_url_is_valid() {
        assert!(PlanClient::new(DEFAULT_BASE_URL).is_ok());
    }
}
