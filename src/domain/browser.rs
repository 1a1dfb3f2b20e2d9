use std::fmt;

use serde::Deserialize;

/// A remote browser environment: operating system, browser name, version.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BrowserSpec {
    /// Operating system name as the grid reports it, e.g. "Windows 10".
    pub os: String,
    /// Browser name, e.g. "chrome".
    pub browser: String,
    /// Browser version, e.g. "70".
    pub version: String,
}

impl BrowserSpec {
    pub fn new(
        os: impl Into<String>,
        browser: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self { os: os.into(), browser: browser.into(), version: version.into() }
    }
}

impl fmt::Display for BrowserSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} on {}", self.browser, self.version, self.os)
    }
}
