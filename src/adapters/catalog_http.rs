//! Live browser catalog fetched from the Sauce Labs REST API.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use url::Url;

use crate::domain::{AppError, BrowserSpec};
use crate::ports::BrowserCatalog;

/// Public listing of WebDriver-capable browsers.
pub const DEFAULT_ENDPOINT: &str = "https://saucelabs.com/rest/v1/info/browsers/webdriver";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One row of the REST listing; unrecognized payload fields are ignored.
#[derive(Debug, Deserialize)]
struct RemoteBrowser {
    os: String,
    api_name: String,
    short_version: String,
}

/// Catalog fetched once at construction and served from the cached listing.
///
/// The fetch performs a single request per call; HTTP and decode failures
/// are hard errors here, and the caller decides whether to fall back to the
/// embedded catalog.
#[derive(Debug)]
pub struct HttpBrowserCatalog {
    rows: Vec<(String, BrowserSpec)>,
}

impl HttpBrowserCatalog {
    /// Fetch the default public listing.
    pub fn fetch() -> Result<Self, AppError> {
        Self::fetch_from(DEFAULT_ENDPOINT)
    }

    /// Fetch the listing from a custom endpoint.
    pub fn fetch_from(endpoint: &str) -> Result<Self, AppError> {
        let url = Url::parse(endpoint).map_err(|e| AppError::Catalog {
            message: format!("Invalid endpoint '{endpoint}': {e}"),
            status: None,
        })?;
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build().map_err(|e| {
            AppError::Catalog { message: format!("Failed to create HTTP client: {e}"), status: None }
        })?;

        let response = client.get(url).send().map_err(|e| AppError::Catalog {
            message: format!("HTTP request failed: {e}"),
            status: None,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Catalog {
                message: "Browser listing request rejected".to_string(),
                status: Some(status.as_u16()),
            });
        }

        let listing: Vec<RemoteBrowser> = response.json().map_err(|e| AppError::Catalog {
            message: format!("Failed to decode browser listing: {e}"),
            status: Some(status.as_u16()),
        })?;

        let rows = listing
            .into_iter()
            .map(|remote| {
                let key = derive_key(&remote.os, &remote.api_name, &remote.short_version);
                (key, BrowserSpec::new(remote.os, remote.api_name, remote.short_version))
            })
            .collect();

        Ok(Self { rows })
    }

    /// Catalog rows in listing order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &BrowserSpec)> {
        self.rows.iter().map(|(key, spec)| (key.as_str(), spec))
    }
}

impl BrowserCatalog for HttpBrowserCatalog {
    fn browser_for_key(&self, key: &str) -> Option<BrowserSpec> {
        self.rows.iter().find(|(k, _)| k == key).map(|(_, spec)| spec.clone())
    }
}

/// Selection keys fold spaces and dots to underscores so they can survive
/// the host's parameter encoding, matching the embedded asset's key shape.
fn derive_key(os: &str, api_name: &str, short_version: &str) -> String {
    format!("{os}_{api_name}_{short_version}")
        .chars()
        .map(|c| if c == ' ' || c == '.' { '_' } else { c })
        .collect()
}
