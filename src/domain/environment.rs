//! Environment variable names injected into the build's shared environment.
//!
//! Downstream build steps read these names verbatim; they must not change.

pub const SAUCE_USER_NAME: &str = "SAUCE_USER_NAME";
pub const SAUCE_API_KEY: &str = "SAUCE_API_KEY";
pub const SELENIUM_DRIVER: &str = "SELENIUM_DRIVER";
pub const SELENIUM_HOST: &str = "SELENIUM_HOST";
pub const SELENIUM_PORT: &str = "SELENIUM_PORT";
pub const SELENIUM_STARTING_URL: &str = "SELENIUM_STARTING_URL";
pub const SELENIUM_MAX_DURATION: &str = "SELENIUM_MAX_DURATION";
pub const SELENIUM_IDLE_TIMEOUT: &str = "SELENIUM_IDLE_TIMEOUT";
pub const SELENIUM_BROWSER: &str = "SELENIUM_BROWSER";
pub const SELENIUM_VERSION: &str = "SELENIUM_VERSION";
pub const SELENIUM_PLATFORM: &str = "SELENIUM_PLATFORM";
