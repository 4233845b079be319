use std::time::Duration;

use anyhow::Result;
use reqwest::Url;
use reqwest::blocking::Client;
use tracing::debug;

use super::{FetchError, SchemeSource, parse_scheme};
use crate::types::{ColorRecord, SchemeRequest};

pub const DEFAULT_ENDPOINT: &str = "https://www.thecolorapi.com/scheme";

/// Builds `<endpoint>?hex=..&mode=..&count=..` for a request.
pub fn scheme_url(endpoint: &str, request: &SchemeRequest) -> Result<Url, FetchError> {
    let count = request.count.to_string();
    Url::parse_with_params(
        endpoint,
        [
            ("hex", request.seed_hex.as_str()),
            ("mode", request.mode.as_str()),
            ("count", count.as_str()),
        ],
    )
    .map_err(|e| FetchError::Network(format!("invalid endpoint {endpoint}: {e}")))
}

/// Blocking client for the public scheme service.
pub struct HttpSchemeClient {
    http: Client,
    endpoint: String,
}

impl HttpSchemeClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("swatchr/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }
}

impl SchemeSource for HttpSchemeClient {
    fn fetch_scheme(&self, request: &SchemeRequest) -> Result<Vec<ColorRecord>, FetchError> {
        let url = scheme_url(&self.endpoint, request)?;
        debug!(%url, "scheme request");

        let response = self
            .http
            .get(url)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        parse_scheme(&body)
    }
}
