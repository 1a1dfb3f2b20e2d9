//! Preview command: derive the session environment a feature file would
//! produce on a real build agent.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::adapters::{EmbeddedBrowserCatalog, MemoryBuild, SauceLifecycle};
use crate::domain::{AppError, FEATURE_TYPE, FeatureConfig};
use crate::ports::{BuildStatus, NoopTunnelManager};

/// Parsed preview file: one `[[feature]]` table per sauce feature, holding
/// the parameters exactly as the build server would supply them.
#[derive(Debug, Deserialize)]
struct PreviewFile {
    #[serde(default)]
    feature: Vec<BTreeMap<String, String>>,
}

/// What a feature would do about Sauce Connect.
#[derive(Debug)]
pub enum TunnelDecision {
    Disabled,
    Start { username: String, port: u16 },
    Blocked { details: String },
}

/// Outcome of a preview run, ready for display.
#[derive(Debug)]
pub struct PreviewReport {
    /// Environment assignments in emission order.
    pub environment: Vec<(String, String)>,
    /// Warnings the features would put into the build log.
    pub warnings: Vec<String>,
    /// One tunnel decision per feature, in file order.
    pub tunnels: Vec<TunnelDecision>,
}

/// Run the real lifecycle against an in-memory build and report what it did.
pub fn execute(path: &Path) -> Result<PreviewReport, AppError> {
    let raw = fs::read_to_string(path)?;
    let file: PreviewFile = toml::from_str(&raw)?;
    if file.feature.is_empty() {
        return Err(AppError::PreviewConfig("no [[feature]] tables found".to_string()));
    }

    let features: Vec<FeatureConfig> = file.feature.into_iter().map(FeatureConfig::new).collect();
    let tunnels = features.iter().map(tunnel_decision).collect();

    let mut build = MemoryBuild::new("preview");
    for feature in &features {
        build = build.with_feature(FEATURE_TYPE, feature.clone());
    }

    let lifecycle = SauceLifecycle::new(NoopTunnelManager, EmbeddedBrowserCatalog::load()?);
    lifecycle.build_started(&build);
    // Mirrors the real agent's full lifecycle; the no-op manager makes the
    // finish-time close requests inert.
    lifecycle.before_build_finish(&build, BuildStatus::Success);

    Ok(PreviewReport {
        environment: build.environment(),
        warnings: build.warnings(),
        tunnels,
    })
}

fn tunnel_decision(feature: &FeatureConfig) -> TunnelDecision {
    if !feature.sauce_connect_enabled() {
        return TunnelDecision::Disabled;
    }
    let outcome = feature
        .credentials()
        .and_then(|(username, _)| Ok((username.to_string(), feature.sauce_connect_port()?)));
    match outcome {
        Ok((username, port)) => TunnelDecision::Start { username, port },
        Err(e) => TunnelDecision::Blocked { details: e.to_string() },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use crate::domain::environment as env;

    fn write_preview(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write preview file");
        file
    }

    #[test]
    fn reports_environment_and_tunnel_decision() {
        let file = write_preview(
            r#"
            [[feature]]
            username = "u1"
            accessKey = "k1"
            sauceConnect = "true"
            seleniumPort = "4446"
            "#,
        );

        let report = execute(file.path()).expect("preview should succeed");

        assert!(report.warnings.is_empty());
        assert!(
            report
                .environment
                .iter()
                .any(|(k, v)| k == env::SAUCE_USER_NAME && v == "u1")
        );
        assert!(matches!(
            report.tunnels[0],
            TunnelDecision::Start { ref username, port: 4446 } if username == "u1"
        ));
    }

    #[test]
    fn rejects_files_without_feature_tables() {
        let file = write_preview("");
        assert!(matches!(execute(file.path()), Err(AppError::PreviewConfig(_))));
    }

    #[test]
    fn surfaces_toml_errors() {
        let file = write_preview("[[feature]\nusername = ");
        assert!(matches!(execute(file.path()), Err(AppError::TomlParse(_))));
    }

    #[test]
    fn blocked_tunnel_reports_details() {
        let file = write_preview(
            r#"
            [[feature]]
            username = "u1"
            accessKey = "k1"
            sauceConnect = "true"
            seleniumPort = "nope"
            "#,
        );

        let report = execute(file.path()).expect("preview should succeed");
        assert!(matches!(
            report.tunnels[0],
            TunnelDecision::Blocked { ref details } if details.contains("Invalid Sauce Connect port")
        ));
    }
}
