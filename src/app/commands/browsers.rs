//! Browsers command: list the browser catalog.

use crate::adapters::{EmbeddedBrowserCatalog, HttpBrowserCatalog};
use crate::domain::{AppError, BrowserSpec};

/// One displayable catalog row.
#[derive(Debug)]
pub struct BrowserRow {
    pub key: String,
    pub spec: BrowserSpec,
}

/// Source of the listing to print.
#[derive(Debug)]
pub enum CatalogSource<'a> {
    Embedded,
    Remote { endpoint: Option<&'a str> },
}

pub fn execute(source: CatalogSource<'_>) -> Result<Vec<BrowserRow>, AppError> {
    let rows = match source {
        CatalogSource::Embedded => collect(EmbeddedBrowserCatalog::load()?.entries()),
        CatalogSource::Remote { endpoint: Some(endpoint) } => {
            collect(HttpBrowserCatalog::fetch_from(endpoint)?.entries())
        }
        CatalogSource::Remote { endpoint: None } => collect(HttpBrowserCatalog::fetch()?.entries()),
    };
    Ok(rows)
}

fn collect<'a>(entries: impl Iterator<Item = (&'a str, &'a BrowserSpec)>) -> Vec<BrowserRow> {
    entries
        .map(|(key, spec)| BrowserRow { key: key.to_string(), spec: spec.clone() })
        .collect()
}
