/// Scheme service client: request building, response parsing and the fetch worker.
mod http;
mod worker;

use serde::Deserialize;

use crate::types::{ColorRecord, SchemeRequest};

#[cfg(test)]
pub use http::scheme_url;
pub use http::{DEFAULT_ENDPOINT, HttpSchemeClient};
pub use worker::{FetchOutcome, Fetcher};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {status}")]
    Http { status: u16 },

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected response: {0}")]
    Parse(String),
}

/// Anything that can turn a [`SchemeRequest`] into a list of colors.
///
/// Implementations must behave like a plain GET: no side effects, safe to
/// call again with the same request.
pub trait SchemeSource: Send + Sync {
    fn fetch_scheme(&self, request: &SchemeRequest) -> Result<Vec<ColorRecord>, FetchError>;
}

#[derive(Deserialize)]
struct SchemeResponse {
    colors: Vec<ColorEntry>,
}

#[derive(Deserialize)]
struct ColorEntry {
    hex: HexField,
}

#[derive(Deserialize)]
struct HexField {
    value: String,
}

/// Extracts the ordered color list from a scheme response body.
pub fn parse_scheme(body: &str) -> Result<Vec<ColorRecord>, FetchError> {
    let response: SchemeResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;
    if response.colors.is_empty() {
        return Err(FetchError::Parse("response contained no colors".to_string()));
    }
    Ok(response
        .colors
        .into_iter()
        .map(|entry| ColorRecord {
            hex: entry.hex.value,
        })
        .collect())
}
