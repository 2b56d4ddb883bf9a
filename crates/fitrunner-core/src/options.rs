//! The fixed option-key set of a FitNesse build step.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A key in the persisted option mapping of a build step.
///
/// Keys are case-sensitive and fixed at compile time; the CI host persists
/// raw string values for a subset of them. Displays as the persisted key
/// string, and `FromStr` parses the same strings back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptionKey {
    /// Whether the plugin launches the FitNesse server itself.
    #[display("START_FITNESSE")]
    StartFitnesse,
    /// Port to use when this plugin starts the server.
    #[display("FITNESSE_PORT_LOCAL")]
    FitnessePortLocal,
    /// Port of an already-running, externally managed server.
    #[display("FITNESSE_PORT_REMOTE")]
    FitnessePortRemote,
    /// Hostname of an externally managed server.
    #[display("FITNESSE_HOST")]
    FitnesseHost,
    /// Milliseconds to wait for HTTP responses.
    #[display("HTTP_TIMEOUT")]
    HttpTimeout,
    /// Filesystem path to the fitnesse.jar archive.
    #[display("PATH_TO_JAR")]
    PathToJar,
    /// Working directory for the launched java process.
    #[display("JAVA_WORKING_DIRECTORY")]
    JavaWorkingDirectory,
}

impl OptionKey {
    /// Every known key, in declaration order.
    pub const ALL: [OptionKey; 7] = [
        OptionKey::StartFitnesse,
        OptionKey::FitnessePortLocal,
        OptionKey::FitnessePortRemote,
        OptionKey::FitnesseHost,
        OptionKey::HttpTimeout,
        OptionKey::PathToJar,
        OptionKey::JavaWorkingDirectory,
    ];
}

/// An option-key string the plugin does not know about.
#[derive(Debug, Error)]
#[error("unknown option key: {0}")]
pub struct UnknownOptionKey(pub String);

impl std::str::FromStr for OptionKey {
    type Err = UnknownOptionKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "START_FITNESSE" => Ok(OptionKey::StartFitnesse),
            "FITNESSE_PORT_LOCAL" => Ok(OptionKey::FitnessePortLocal),
            "FITNESSE_PORT_REMOTE" => Ok(OptionKey::FitnessePortRemote),
            "FITNESSE_HOST" => Ok(OptionKey::FitnesseHost),
            "HTTP_TIMEOUT" => Ok(OptionKey::HttpTimeout),
            "PATH_TO_JAR" => Ok(OptionKey::PathToJar),
            "JAVA_WORKING_DIRECTORY" => Ok(OptionKey::JavaWorkingDirectory),
            _ => Err(UnknownOptionKey(s.to_string())),
        }
    }
}
