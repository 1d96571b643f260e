use std::fmt;

use serde_json::Value;
use url::Url;

/// Error from the fetch layer. Carries whatever the underlying client said.
#[derive(Debug, Clone)]
pub struct FetchError(pub String);

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for FetchError {}

/// Read-only access to the content files backing the guide.
///
/// The production implementation speaks HTTP against the site root; tests
/// substitute an in-memory map. Paths are site-relative
/// (`data/food-recs/tapas/index.json`).
#[allow(async_fn_in_trait)]
pub trait Fetch {
    async fn get_json(&self, path: &str) -> Result<Value, FetchError>;
    async fn get_text(&self, path: &str) -> Result<String, FetchError>;
}

/// Fetches content files relative to a base URL.
///
/// The base must end with a trailing slash, otherwise `Url::join` would
/// resolve siblings instead of children.
pub struct HttpFetcher {
    client: reqwest::Client,
    base: Url,
}

impl HttpFetcher {
    pub fn new(base: Url) -> Self {
        HttpFetcher {
            client: reqwest::Client::new(),
            base,
        }
    }

    fn resolve(&self, path: &str) -> Result<Url, FetchError> {
        self.base
            .join(path)
            .map_err(|e| FetchError(format!("bad content path {}: {}", path, e)))
    }

    async fn get(&self, path: &str) -> Result<reqwest::Response, FetchError> {
        let url = self.resolve(path)?;
        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError(format!("request to {} failed: {}", url, e)))?;
        if !resp.status().is_success() {
            return Err(FetchError(format!("{} returned {}", url, resp.status())));
        }
        Ok(resp)
    }
}

impl Fetch for HttpFetcher {
    async fn get_json(&self, path: &str) -> Result<Value, FetchError> {
        let resp = self.get(path).await?;
        resp.json()
            .await
            .map_err(|e| FetchError(format!("{}: JSON parse error: {}", path, e)))
    }

    async fn get_text(&self, path: &str) -> Result<String, FetchError> {
        let resp = self.get(path).await?;
        resp.text()
            .await
            .map_err(|e| FetchError(format!("{}: read error: {}", path, e)))
    }
}
