//! Sauce build-feature configuration.

use std::collections::BTreeMap;

use crate::domain::AppError;

/// Build-feature type string the host uses to tag sauce features.
pub const FEATURE_TYPE: &str = "sauce";

/// Sauce Connect port used when `seleniumPort` is not configured.
pub const DEFAULT_SAUCE_CONNECT_PORT: u16 = 4445;

/// Recognized feature parameter keys.
///
/// These strings are part of the build-feature descriptor contract with the
/// build server and must not be renamed.
pub mod param {
    pub const USERNAME: &str = "username";
    pub const ACCESS_KEY: &str = "accessKey";
    pub const SAUCE_CONNECT: &str = "sauceConnect";
    pub const SAUCE_CONNECT_OPTIONS: &str = "sauceConnectOptions";
    pub const HTTPS_PROTOCOL: &str = "sauceHttpsProtocol";
    pub const SELENIUM_HOST: &str = "seleniumHost";
    pub const SELENIUM_PORT: &str = "seleniumPort";
    pub const STARTING_URL: &str = "seleniumStartingUrl";
    pub const MAX_DURATION: &str = "seleniumMaxDuration";
    pub const IDLE_TIMEOUT: &str = "seleniumIdleTimeout";
    pub const SELECTED_BROWSER: &str = "seleniumBrowsers";
}

/// Parameter map of a single "sauce" build feature.
///
/// Owned by the host and read-only here. Values are opaque strings exactly as
/// the build server supplied them; accessors interpret the keys this
/// component recognizes.
#[derive(Debug, Clone, Default)]
pub struct FeatureConfig {
    params: BTreeMap<String, String>,
}

impl FeatureConfig {
    pub fn new(params: BTreeMap<String, String>) -> Self {
        Self { params }
    }

    /// Raw parameter lookup.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn username(&self) -> Option<&str> {
        self.param(param::USERNAME)
    }

    pub fn access_key(&self) -> Option<&str> {
        self.param(param::ACCESS_KEY)
    }

    /// Username and access key together. Both are required before any
    /// provisioning happens for the feature.
    pub fn credentials(&self) -> Result<(&str, &str), AppError> {
        let username = self.username().ok_or(AppError::MissingParameter(param::USERNAME))?;
        let access_key = self.access_key().ok_or(AppError::MissingParameter(param::ACCESS_KEY))?;
        Ok((username, access_key))
    }

    /// Whether the feature asks for a Sauce Connect tunnel.
    ///
    /// Only the exact string "true" enables the tunnel; any other value,
    /// including "TRUE" or "1", leaves it disabled.
    pub fn sauce_connect_enabled(&self) -> bool {
        self.param(param::SAUCE_CONNECT) == Some("true")
    }

    /// Sauce Connect port, defaulting to 4445 when unset.
    ///
    /// A present but non-numeric value is a configuration bug and surfaces
    /// as a hard error on the open attempt.
    pub fn sauce_connect_port(&self) -> Result<u16, AppError> {
        match self.param(param::SELENIUM_PORT) {
            None => Ok(DEFAULT_SAUCE_CONNECT_PORT),
            Some(raw) => raw.parse().map_err(|e: std::num::ParseIntError| AppError::InvalidPort {
                value: raw.to_string(),
                details: e.to_string(),
            }),
        }
    }

    pub fn sauce_connect_options(&self) -> Option<&str> {
        self.param(param::SAUCE_CONNECT_OPTIONS)
    }

    pub fn https_protocol(&self) -> Option<&str> {
        self.param(param::HTTPS_PROTOCOL)
    }

    pub fn selenium_host(&self) -> Option<&str> {
        self.param(param::SELENIUM_HOST)
    }

    /// Raw `seleniumPort` value, for environment propagation.
    pub fn selenium_port_raw(&self) -> Option<&str> {
        self.param(param::SELENIUM_PORT)
    }

    pub fn starting_url(&self) -> Option<&str> {
        self.param(param::STARTING_URL)
    }

    pub fn max_duration(&self) -> Option<&str> {
        self.param(param::MAX_DURATION)
    }

    pub fn idle_timeout(&self) -> Option<&str> {
        self.param(param::IDLE_TIMEOUT)
    }

    /// Browser selection key, only when exactly one key is configured.
    ///
    /// The configuration surface is a multi-select list constrained to a
    /// single selection; zero or several comma-separated keys resolve to
    /// no selection.
    pub fn selected_browser(&self) -> Option<&str> {
        let raw = self.param(param::SELECTED_BROWSER)?;
        let mut keys = raw.split(',').map(str::trim).filter(|key| !key.is_empty());
        let first = keys.next()?;
        if keys.next().is_some() {
            return None;
        }
        Some(first)
    }
}

impl FromIterator<(String, String)> for FeatureConfig {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self { params: iter.into_iter().collect() }
    }
}
