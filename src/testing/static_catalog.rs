use crate::domain::BrowserSpec;
use crate::ports::BrowserCatalog;

/// Catalog fake resolving from a fixed key/spec list.
#[derive(Default)]
pub struct StaticCatalog {
    entries: Vec<(String, BrowserSpec)>,
}

impl StaticCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with(key: &str, spec: BrowserSpec) -> Self {
        Self { entries: vec![(key.to_string(), spec)] }
    }
}

impl BrowserCatalog for StaticCatalog {
    fn browser_for_key(&self, key: &str) -> Option<BrowserSpec> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, spec)| spec.clone())
    }
}
