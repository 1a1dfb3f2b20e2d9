use std::fmt;

use crate::domain::FeatureConfig;

/// Final status the host reports for a finishing build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStatus {
    Success,
    Failed,
    Interrupted,
}

impl fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BuildStatus::Success => "success",
            BuildStatus::Failed => "failed",
            BuildStatus::Interrupted => "interrupted",
        })
    }
}

/// Port onto the host's running-build handle.
pub trait RunningBuild {
    /// Stable identifier for log correlation.
    fn build_id(&self) -> String;

    /// Build features of the given type attached to this build.
    fn features_of_type(&self, feature_type: &str) -> Vec<FeatureConfig>;

    /// Inject a variable into the build's shared environment, visible to
    /// subsequent build steps for the lifetime of the build.
    fn add_shared_environment_variable(&self, key: &str, value: &str);

    /// Write a warning line to the build's own log.
    fn warn(&self, message: &str);
}
