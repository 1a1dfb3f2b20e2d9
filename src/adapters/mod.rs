mod catalog_embedded;
mod catalog_http;
mod lifecycle;
mod memory_build;

pub use catalog_embedded::EmbeddedBrowserCatalog;
pub use catalog_http::{DEFAULT_ENDPOINT, HttpBrowserCatalog};
pub use lifecycle::SauceLifecycle;
pub use memory_build::MemoryBuild;
