//! In-memory running-build handle for previews and host-less runs.

use std::sync::Mutex;

use crate::domain::FeatureConfig;
use crate::ports::RunningBuild;

/// A detached build handle recording environment assignments and warnings.
///
/// Stands in for the host's build object wherever no build server is
/// present: the preview CLI runs the real lifecycle against one of these and
/// prints what it recorded.
#[derive(Debug, Default)]
pub struct MemoryBuild {
    id: String,
    features: Vec<(String, FeatureConfig)>,
    environment: Mutex<Vec<(String, String)>>,
    warnings: Mutex<Vec<String>>,
}

impl MemoryBuild {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), ..Self::default() }
    }

    /// Attach a build feature of the given type.
    pub fn with_feature(mut self, feature_type: &str, config: FeatureConfig) -> Self {
        self.features.push((feature_type.to_string(), config));
        self
    }

    /// Environment assignments in emission order.
    pub fn environment(&self) -> Vec<(String, String)> {
        self.environment.lock().unwrap().clone()
    }

    /// Value of a single recorded environment variable, when written.
    pub fn environment_value(&self, key: &str) -> Option<String> {
        self.environment
            .lock()
            .unwrap()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    /// Warnings surfaced to the build log, in order.
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }
}

impl RunningBuild for MemoryBuild {
    fn build_id(&self) -> String {
        self.id.clone()
    }

    fn features_of_type(&self, feature_type: &str) -> Vec<FeatureConfig> {
        self.features
            .iter()
            .filter(|(kind, _)| kind == feature_type)
            .map(|(_, config)| config.clone())
            .collect()
    }

    fn add_shared_environment_variable(&self, key: &str, value: &str) {
        self.environment.lock().unwrap().push((key.to_string(), value.to_string()));
    }

    fn warn(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn features_are_filtered_by_type() {
        let sauce: FeatureConfig =
            [("username".to_string(), "u1".to_string())].into_iter().collect();
        let build = MemoryBuild::new("1")
            .with_feature("sauce", sauce)
            .with_feature("docker", FeatureConfig::default());

        assert_eq!(build.features_of_type("sauce").len(), 1);
        assert_eq!(build.features_of_type("docker").len(), 1);
        assert!(build.features_of_type("maven").is_empty());
    }

    #[test]
    fn environment_preserves_emission_order() {
        let build = MemoryBuild::new("1");
        build.add_shared_environment_variable("B", "2");
        build.add_shared_environment_variable("A", "1");

        assert_eq!(
            build.environment(),
            vec![("B".to_string(), "2".to_string()), ("A".to_string(), "1".to_string())]
        );
        assert_eq!(build.environment_value("A").as_deref(), Some("1"));
        assert!(build.environment_value("C").is_none());
    }
}
