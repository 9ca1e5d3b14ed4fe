//! Dashboard CRUD over the v1 API.
//!
//! Each operation is one blocking-from-the-caller's-view request with no
//! retry; retry policy belongs to the caller.

use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::credentials::Credentials;
use crate::error::{ClientError, Result};

/// Default per-request timeout.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One dashboard in a listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DashboardSummary {
    /// Dashboard ID.
    #[serde(default)]
    pub id: String,
    /// Dashboard title.
    #[serde(default)]
    pub title: String,
    /// Relative URL of the dashboard.
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Deserialize)]
struct DashboardPage {
    dashboards: Vec<DashboardSummary>,
}

#[derive(Debug, Deserialize)]
struct ApiErrors {
    errors: Vec<String>,
}

/// Client for the v1 dashboard endpoint.
pub struct DashboardClient {
    http: reqwest::Client,
    credentials: Credentials,
    base_url: String,
}

impl std::fmt::Debug for DashboardClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl DashboardClient {
    /// Creates a client for the given credentials.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Transport` if the HTTP client cannot be
    /// built.
    pub fn new(credentials: Credentials) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ClientError::Transport {
                reason: e.to_string(),
            })?;
        let base_url = credentials.base_url();
        Ok(Self {
            http,
            credentials,
            base_url,
        })
    }

    /// Creates a client from environment credentials.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::MissingCredentials` if a key variable is
    /// absent.
    pub fn from_env() -> Result<Self> {
        Self::new(Credentials::from_env()?)
    }

    /// Returns the API base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}/{path}", self.base_url))
            .header("DD-API-KEY", self.credentials.api_key())
            .header("DD-APPLICATION-KEY", self.credentials.app_key())
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await.map_err(|e| ClientError::Transport {
            reason: e.to_string(),
        })?;
        Self::check(response).await
    }

    /// Turns a non-success response into an API error carrying the
    /// server's messages.
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ApiErrors>(&body) {
            Ok(parsed) if !parsed.errors.is_empty() => parsed.errors.join("; "),
            _ if body.is_empty() => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
            _ => body,
        };
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn json(response: Response) -> Result<Value> {
        response
            .json()
            .await
            .map_err(|e| ClientError::Decode {
                reason: e.to_string(),
            })
    }

    /// Creates a dashboard and returns the created document (including
    /// its server-assigned `id` and `url`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn create(&self, document: &Value) -> Result<Value> {
        debug!("creating dashboard");
        let response = self
            .send(self.request(Method::POST, "v1/dashboard").json(document))
            .await?;
        Self::json(response).await
    }

    /// Updates the dashboard with the given ID and returns the updated
    /// document.
    ///
    /// # Errors
    ///
    /// Returns an error if the dashboard does not exist or the request
    /// fails.
    pub async fn update(&self, id: &str, document: &Value) -> Result<Value> {
        debug!(id, "updating dashboard");
        let response = self
            .send(
                self.request(Method::PUT, &format!("v1/dashboard/{id}"))
                    .json(document),
            )
            .await?;
        Self::json(response).await
    }

    /// Fetches the dashboard with the given ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the dashboard does not exist or the request
    /// fails.
    pub async fn fetch(&self, id: &str) -> Result<Value> {
        debug!(id, "fetching dashboard");
        let response = self
            .send(self.request(Method::GET, &format!("v1/dashboard/{id}")))
            .await?;
        Self::json(response).await
    }

    /// Checks whether a dashboard with the given ID exists.
    ///
    /// A 404 maps to `false`; any other failure surfaces as an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails for a reason other than the
    /// dashboard being absent.
    pub async fn exists(&self, id: &str) -> Result<bool> {
        match self.fetch(id).await {
            Ok(_) => Ok(true),
            Err(ClientError::Api { status, .. }) if status == StatusCode::NOT_FOUND => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Deletes the dashboard with the given ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the dashboard does not exist or the request
    /// fails.
    pub async fn delete(&self, id: &str) -> Result<()> {
        debug!(id, "deleting dashboard");
        self.send(self.request(Method::DELETE, &format!("v1/dashboard/{id}")))
            .await?;
        Ok(())
    }

    /// Lists all dashboards.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn list(&self) -> Result<Vec<DashboardSummary>> {
        debug!("listing dashboards");
        let response = self.send(self.request(Method::GET, "v1/dashboard")).await?;
        let page: DashboardPage =
            response.json().await.map_err(|e| ClientError::Decode {
                reason: e.to_string(),
            })?;
        Ok(page.dashboards)
    }
}
