//! Build lifecycle hook for "sauce" build features.

use tracing::{debug, error, warn};

use crate::domain::{
    AppError, BrowserSpec, DriverUri, FEATURE_TYPE, FeatureConfig, TunnelRequest,
    environment as env,
};
use crate::ports::{BrowserCatalog, BuildStatus, RunningBuild, TunnelManager};

/// Lifecycle hook provisioning Sauce OnDemand session environment for builds
/// carrying "sauce" build features.
///
/// Holds no per-build state: every callback receives the build handle
/// explicitly, so one instance can serve consecutive builds.
pub struct SauceLifecycle<T: TunnelManager, C: BrowserCatalog> {
    tunnels: T,
    browsers: C,
}

impl<T: TunnelManager, C: BrowserCatalog> SauceLifecycle<T, C> {
    pub fn new(tunnels: T, browsers: C) -> Self {
        Self { tunnels, browsers }
    }

    /// Host callback: a build has started.
    ///
    /// Applies every "sauce" feature independently: injects session
    /// environment variables and, when requested, asks the tunnel manager
    /// for a Sauce Connect tunnel. Failures are reported to the build log
    /// and never abort the build.
    pub fn build_started(&self, build: &impl RunningBuild) {
        for feature in build.features_of_type(FEATURE_TYPE) {
            self.apply_feature(build, &feature);
        }
    }

    /// Host callback: a build is about to finish.
    ///
    /// Closes tunnels for each feature's username regardless of build
    /// status; a cleanup failure must not fail the build.
    pub fn before_build_finish(&self, build: &impl RunningBuild, status: BuildStatus) {
        for feature in build.features_of_type(FEATURE_TYPE) {
            let Some(username) = feature.username() else { continue };
            debug!(build = %build.build_id(), %status, username, "closing Sauce Connect tunnels");
            if let Err(e) = self.tunnels.close_tunnels_for_plan(username) {
                debug!(build = %build.build_id(), username, "tunnel close failed: {e}");
            }
        }
    }

    fn apply_feature(&self, build: &impl RunningBuild, feature: &FeatureConfig) {
        let (username, access_key) = match feature.credentials() {
            Ok(credentials) => credentials,
            Err(e) => {
                warn!(build = %build.build_id(), "sauce feature rejected: {e}");
                build.warn(&format!("Sauce feature ignored: {e}"));
                return;
            }
        };

        let browser = feature
            .selected_browser()
            .and_then(|key| self.browsers.browser_for_key(key));
        populate_environment(build, feature, username, access_key, browser.as_ref());

        if feature.sauce_connect_enabled() {
            if let Err(e) = self.start_sauce_connect(feature, username, access_key) {
                error!(build = %build.build_id(), "Error launching Sauce Connect: {e}");
                build.warn(&format!("Sauce Connect not started: {e}"));
            }
        }
    }

    fn start_sauce_connect(
        &self,
        feature: &FeatureConfig,
        username: &str,
        access_key: &str,
    ) -> Result<(), AppError> {
        let request = TunnelRequest {
            username: username.to_string(),
            access_key: access_key.to_string(),
            port: feature.sauce_connect_port()?,
            options: feature.sauce_connect_options().map(str::to_string),
            protocol: feature.https_protocol().map(str::to_string),
        };
        self.tunnels.open_connection(&request)
    }
}

fn populate_environment(
    build: &impl RunningBuild,
    feature: &FeatureConfig,
    username: &str,
    access_key: &str,
    browser: Option<&BrowserSpec>,
) {
    let driver_uri = DriverUri::new(username, access_key)
        .with_browser(browser.cloned())
        .with_max_duration(feature.max_duration())
        .with_idle_timeout(feature.idle_timeout());

    add_if_present(build, env::SAUCE_USER_NAME, Some(username));
    add_if_present(build, env::SAUCE_API_KEY, Some(access_key));
    add_if_present(build, env::SELENIUM_DRIVER, Some(driver_uri.render().as_str()));
    add_if_present(build, env::SELENIUM_HOST, feature.selenium_host());
    add_if_present(build, env::SELENIUM_PORT, feature.selenium_port_raw());
    add_if_present(build, env::SELENIUM_STARTING_URL, feature.starting_url());
    add_if_present(build, env::SELENIUM_MAX_DURATION, feature.max_duration());
    add_if_present(build, env::SELENIUM_IDLE_TIMEOUT, feature.idle_timeout());
    if let Some(browser) = browser {
        add_if_present(build, env::SELENIUM_BROWSER, Some(&browser.browser));
        add_if_present(build, env::SELENIUM_VERSION, Some(&browser.version));
        add_if_present(build, env::SELENIUM_PLATFORM, Some(&browser.os));
    }
}

/// A variable is written only when its source value is present; no key is
/// ever written with an empty or placeholder value.
fn add_if_present(build: &impl RunningBuild, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        build.add_shared_environment_variable(key, value);
    }
}
