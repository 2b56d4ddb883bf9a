//! The persisted option mapping of a build step.

use crate::ConfigResult;
use fitrunner_core::OptionKey;
use kdl::{KdlDocument, KdlNode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Raw key/value options persisted with one build-step definition.
///
/// Values are raw strings and may still contain `$NAME` build-variable
/// tokens. A missing key and a present-but-empty value are the same thing
/// for every reader: unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepOptions {
    options: HashMap<OptionKey, String>,
}

impl StepOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a raw option value.
    pub fn set(&mut self, key: OptionKey, value: impl Into<String>) {
        self.options.insert(key, value.into());
    }

    /// Remove an option entirely. Readers cannot tell this apart from
    /// setting the empty string.
    pub fn unset(&mut self, key: OptionKey) {
        self.options.remove(&key);
    }

    /// Builder-style `set`.
    pub fn with(mut self, key: OptionKey, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// The raw value for `key`, or `None` when the key is missing or its
    /// value is empty.
    pub fn get(&self, key: OptionKey) -> Option<&str> {
        self.options
            .get(&key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Parse options from a KDL step definition.
    ///
    /// Each top-level node named by an option key carries the raw value as
    /// its first string argument. Unknown nodes are ignored.
    pub fn from_kdl(kdl: &str) -> ConfigResult<Self> {
        let doc: KdlDocument = kdl.parse()?;
        let mut options = Self::new();

        for node in doc.nodes() {
            match node.name().value().parse::<OptionKey>() {
                Ok(key) => {
                    if let Some(value) = first_string_arg(node) {
                        options.set(key, value);
                    }
                }
                Err(_) => {
                    debug!(node = node.name().value(), "ignoring unknown option node");
                }
            }
        }

        Ok(options)
    }

    /// Read and parse a KDL step definition file.
    pub fn from_kdl_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_kdl(&text)
    }
}

fn first_string_arg(node: &KdlNode) -> Option<String> {
    node.entries()
        .iter()
        .find(|e| e.name().is_none())
        .and_then(|e| e.value().as_string())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_and_empty_values_are_both_unset() {
        let mut options = StepOptions::new();
        assert_eq!(options.get(OptionKey::FitnesseHost), None);

        options.set(OptionKey::FitnesseHost, "");
        assert_eq!(options.get(OptionKey::FitnesseHost), None);

        options.set(OptionKey::FitnesseHost, "hudson.local");
        assert_eq!(options.get(OptionKey::FitnesseHost), Some("hudson.local"));

        options.unset(OptionKey::FitnesseHost);
        assert_eq!(options.get(OptionKey::FitnesseHost), None);
    }

    #[test]
    fn parses_a_kdl_step_definition() {
        let kdl = r#"
            START_FITNESSE "true"
            FITNESSE_PORT_LOCAL "8081"
            PATH_TO_JAR "/opt/fitnesse/fitnesse.jar"
        "#;

        let options = StepOptions::from_kdl(kdl).unwrap();
        assert_eq!(options.get(OptionKey::StartFitnesse), Some("true"));
        assert_eq!(options.get(OptionKey::FitnessePortLocal), Some("8081"));
        assert_eq!(
            options.get(OptionKey::PathToJar),
            Some("/opt/fitnesse/fitnesse.jar")
        );
        assert_eq!(options.get(OptionKey::FitnessePortRemote), None);
    }

    #[test]
    fn unknown_kdl_nodes_are_ignored() {
        let kdl = r#"
            FITNESSE_PORT_REMOTE "999"
            SOME_FUTURE_OPTION "whatever"
        "#;

        let options = StepOptions::from_kdl(kdl).unwrap();
        assert_eq!(options.get(OptionKey::FitnessePortRemote), Some("999"));
        assert_eq!(
            options,
            StepOptions::new().with(OptionKey::FitnessePortRemote, "999")
        );
    }

    #[test]
    fn reads_a_kdl_step_definition_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"HTTP_TIMEOUT "1000""#).unwrap();

        let options = StepOptions::from_kdl_file(file.path()).unwrap();
        assert_eq!(options.get(OptionKey::HttpTimeout), Some("1000"));
    }

    #[test]
    fn round_trips_through_the_persisted_json_form() {
        let options = StepOptions::new()
            .with(OptionKey::FitnessePortLocal, "99")
            .with(OptionKey::FitnesseHost, "$MYHOSTNAME");

        let json = serde_json::to_string(&options).unwrap();
        assert!(json.contains("FITNESSE_PORT_LOCAL"));

        let restored: StepOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, options);
    }
}
