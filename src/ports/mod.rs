mod browser_catalog;
mod running_build;
mod tunnel_manager;

pub use browser_catalog::BrowserCatalog;
pub use running_build::{BuildStatus, RunningBuild};
pub use tunnel_manager::{NoopTunnelManager, TunnelManager};
