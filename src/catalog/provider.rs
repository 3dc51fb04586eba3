use std::fmt;

use async_trait::async_trait;

use super::types::Catalog;

/// Errors that can occur while fetching the model catalog.
#[derive(Debug)]
pub enum CatalogError {
    /// Provider misconfigured (missing API key, bad URL).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// API returned an error response (auth, rate limit, server error).
    Api { status: u16, message: String },
    /// Failed to parse the provider's response.
    Parse(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Config(msg) => write!(f, "config error: {msg}"),
            CatalogError::Network(msg) => write!(f, "network error: {msg}"),
            CatalogError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            CatalogError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Fetches the full model catalog in one call.
    async fn list_models(&self) -> Result<Catalog, CatalogError>;
}
