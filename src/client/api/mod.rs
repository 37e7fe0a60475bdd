//! HTTP client for the registry API.
//!
//! ```rust,ignore
//! let client = FacultyClient::new("http://localhost:5000")?;
//! let degrees = client.get_degrees().await?;
//! ```

pub mod degree;
pub mod department;
pub mod helper;
pub mod teacher;

use std::time::Duration;

use crate::client::model::error::ApiError;

/// Requests that take longer than this are aborted and surface as an `ApiError`.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the registry API rooted at `base_url`.
#[derive(Clone, Debug)]
pub struct FacultyClient {
    http: reqwest::Client,
    base_url: String,
}

impl FacultyClient {
    /// Creates a client for the server at `base_url`, e.g. `http://localhost:5000`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self::with_client(http, base_url))
    }

    /// Uses an existing reqwest client, keeping whatever timeout it was built with.
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }
}
