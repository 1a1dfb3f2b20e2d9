//! sauce-agent: build lifecycle hook provisioning Sauce OnDemand session
//! environment variables and Sauce Connect tunnel requests for CI builds.
//!
//! The CI host, the tunnel manager, and the browser catalog sit behind the
//! traits in [`ports`]; [`adapters::SauceLifecycle`] carries the build-start
//! and build-finish behavior and is the piece a host integration wires up.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::{EmbeddedBrowserCatalog, HttpBrowserCatalog, MemoryBuild, SauceLifecycle};
pub use domain::{AppError, BrowserSpec, DriverUri, FeatureConfig, TunnelRequest};
pub use ports::{BrowserCatalog, BuildStatus, NoopTunnelManager, RunningBuild, TunnelManager};
