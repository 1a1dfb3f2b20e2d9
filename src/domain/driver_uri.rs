//! Sauce OnDemand driver URI construction.

use std::fmt;

use crate::domain::BrowserSpec;

/// Connection string consumed by selenium-client-factory style libraries to
/// select and configure a remote browser session.
///
/// Segment order is fixed: username, access-key, optional browser triple,
/// optional max-duration, optional idle-timeout. Values are embedded
/// verbatim; downstream consumers expect unencoded text such as
/// `Windows 10`.
#[derive(Debug, Clone)]
pub struct DriverUri {
    username: String,
    access_key: String,
    browser: Option<BrowserSpec>,
    max_duration: Option<String>,
    idle_timeout: Option<String>,
}

impl DriverUri {
    pub fn new(username: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            access_key: access_key.into(),
            browser: None,
            max_duration: None,
            idle_timeout: None,
        }
    }

    pub fn with_browser(mut self, browser: Option<BrowserSpec>) -> Self {
        self.browser = browser;
        self
    }

    pub fn with_max_duration(mut self, value: Option<&str>) -> Self {
        self.max_duration = value.map(str::to_string);
        self
    }

    pub fn with_idle_timeout(mut self, value: Option<&str>) -> Self {
        self.idle_timeout = value.map(str::to_string);
        self
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DriverUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sauce-ondemand:?username={}&access-key={}", self.username, self.access_key)?;
        if let Some(browser) = &self.browser {
            write!(
                f,
                "&os={}&browser={}&browser-version={}",
                browser.os, browser.browser, browser.version
            )?;
        }
        if let Some(value) = &self.max_duration {
            write!(f, "&max-duration={value}")?;
        }
        if let Some(value) = &self.idle_timeout {
            write!(f, "&idle-timeout={value}")?;
        }
        Ok(())
    }
}
