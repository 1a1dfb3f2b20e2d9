mod browser;
mod driver_uri;
pub mod environment;
mod error;
mod feature;
mod tunnel;

pub use browser::BrowserSpec;
pub use driver_uri::DriverUri;
pub use error::AppError;
pub use feature::{DEFAULT_SAUCE_CONNECT_PORT, FEATURE_TYPE, FeatureConfig, param};
pub use tunnel::TunnelRequest;
