//! Async HTTP client for the registry's cadastral-status endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::key::lookup_key;
use crate::core::Cnpj;

/// Cadastral status returned by the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryStatus {
    /// The CNPJ the registry answered for, as a raw numeric value.
    pub cnpj: u64,
    /// Registration situation, e.g. "ATIVA" or "BAIXADA".
    pub situacao: String,
}

impl RegistryStatus {
    /// Whether the registration is currently active.
    pub fn is_active(&self) -> bool {
        self.situacao == "ATIVA"
    }
}

/// Error from the registry lookup.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum RegistryError {
    /// Network or HTTP transport error.
    Network(String),
    /// The registry answered with a non-success status.
    Api(String),
    /// Failed to parse the response body.
    Parse(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "registry network error: {e}"),
            Self::Api(e) => write!(f, "registry API error: {e}"),
            Self::Parse(e) => write!(f, "registry parse error: {e}"),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Production endpoint for cadastral-status lookups.
pub const DEFAULT_REGISTRY_URL: &str = "https://api.receita.gov.br/v1/cnpj";

/// Look up the cadastral status of a CNPJ.
///
/// `base_url` is the endpoint root (see [`DEFAULT_REGISTRY_URL`]); the
/// canonical 14-digit key is appended as a path segment. This function is
/// async and requires network access. Retry and timeout policy are the
/// caller's concern.
///
/// # Errors
///
/// [`RegistryError::Network`] on transport failure, [`RegistryError::Api`]
/// on a non-success HTTP status, [`RegistryError::Parse`] if the body is
/// not the expected JSON shape.
pub async fn check_status(base_url: &str, cnpj: &Cnpj) -> Result<RegistryStatus, RegistryError> {
    let url = format!("{}/{}", base_url.trim_end_matches('/'), lookup_key(cnpj));

    let client = reqwest::Client::new();
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| RegistryError::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(RegistryError::Api(format!(
            "registry returned HTTP {}",
            response.status()
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| RegistryError::Network(e.to_string()))?;
    serde_json::from_str(&body).map_err(|e| RegistryError::Parse(e.to_string()))
}
