use crate::domain::BrowserSpec;

/// Port onto the catalog mapping browser selection keys to browser metadata.
pub trait BrowserCatalog {
    /// Resolve a browser selection key, when known.
    fn browser_for_key(&self, key: &str) -> Option<BrowserSpec>;
}
