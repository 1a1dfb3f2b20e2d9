mod fake_tunnel;
mod static_catalog;

#[allow(unused_imports)]
pub use fake_tunnel::FakeTunnelManager;
#[allow(unused_imports)]
pub use static_catalog::StaticCatalog;
