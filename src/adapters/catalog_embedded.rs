//! Browser catalog backed by the embedded webdriver listing.

use serde::Deserialize;

use crate::domain::{AppError, BrowserSpec};
use crate::ports::BrowserCatalog;

static CATALOG_JSON: &str = include_str!("../assets/webdriver_browsers.json");

#[derive(Debug, Clone, Deserialize)]
struct CatalogRow {
    key: String,
    #[serde(flatten)]
    spec: BrowserSpec,
}

/// Catalog parsed once from the asset compiled into the binary.
///
/// A snapshot of the public webdriver listing; the live listing is served by
/// `HttpBrowserCatalog`.
#[derive(Debug, Clone)]
pub struct EmbeddedBrowserCatalog {
    rows: Vec<CatalogRow>,
}

impl EmbeddedBrowserCatalog {
    pub fn load() -> Result<Self, AppError> {
        let rows = serde_json::from_str(CATALOG_JSON)
            .map_err(|e| AppError::Asset(format!("Invalid embedded browser catalog: {e}")))?;
        Ok(Self { rows })
    }

    /// Catalog rows in asset order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &BrowserSpec)> {
        self.rows.iter().map(|row| (row.key.as_str(), &row.spec))
    }
}

impl BrowserCatalog for EmbeddedBrowserCatalog {
    fn browser_for_key(&self, key: &str) -> Option<BrowserSpec> {
        self.rows.iter().find(|row| row.key == key).map(|row| row.spec.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses_and_is_populated() {
        let catalog = EmbeddedBrowserCatalog::load().expect("catalog should load");
        assert!(catalog.entries().count() > 0);
    }

    #[test]
    fn known_key_resolves_to_its_spec() {
        let catalog = EmbeddedBrowserCatalog::load().expect("catalog should load");
        let spec = catalog.browser_for_key("Windows_10_chrome_70").unwrap();
        assert_eq!(spec, BrowserSpec::new("Windows 10", "chrome", "70"));
    }

    #[test]
    fn unknown_key_resolves_to_none() {
        let catalog = EmbeddedBrowserCatalog::load().expect("catalog should load");
        assert!(catalog.browser_for_key("Amiga_netscape_3").is_none());
    }
}
