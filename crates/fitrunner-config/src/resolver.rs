//! Typed resolution of build-step options.

use crate::error::{ConfigError, ConfigResult};
use crate::options::StepOptions;
use crate::variables::{BuildContext, ConfigValue};
use fitrunner_core::OptionKey;
use std::path::Path;
use std::time::Duration;

/// HTTP timeout used when HTTP_TIMEOUT is unset.
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_millis(60_000);

/// Which port option a step is bound to.
///
/// Precedence is positional: the local port wins whenever it is set,
/// regardless of either value.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PortBinding {
    Local(ConfigValue),
    Remote(ConfigValue),
}

/// Typed view of one build step's options.
///
/// Construction is a pure read of the mapping and never mutates it. Nothing
/// is validated eagerly; malformed numbers surface when the value is
/// actually resolved.
#[derive(Debug, Clone)]
pub struct StepConfig {
    start: bool,
    port: Option<PortBinding>,
    host: Option<ConfigValue>,
    http_timeout: Option<String>,
    path_to_jar: Option<String>,
    java_working_directory: Option<String>,
}

impl StepConfig {
    /// Build the typed view of `options`.
    pub fn from_options(options: &StepOptions) -> Self {
        let start = options
            .get(OptionKey::StartFitnesse)
            .is_some_and(|v| v.eq_ignore_ascii_case("true"));

        let port = match (
            options.get(OptionKey::FitnessePortLocal),
            options.get(OptionKey::FitnessePortRemote),
        ) {
            (Some(local), _) => Some(PortBinding::Local(ConfigValue::new(local))),
            (None, Some(remote)) => Some(PortBinding::Remote(ConfigValue::new(remote))),
            (None, None) => None,
        };

        Self {
            start,
            port,
            host: options.get(OptionKey::FitnesseHost).map(ConfigValue::new),
            http_timeout: options.get(OptionKey::HttpTimeout).map(str::to_string),
            path_to_jar: options.get(OptionKey::PathToJar).map(str::to_string),
            java_working_directory: options
                .get(OptionKey::JavaWorkingDirectory)
                .map(str::to_string),
        }
    }

    /// Whether the plugin launches the server itself.
    ///
    /// START_FITNESSE is matched case-insensitively; unset or unrecognized
    /// means false. No build-variable expansion: this must be resolvable
    /// statically.
    pub fn start(&self) -> bool {
        self.start
    }

    /// The port to talk to, expanded against `ctx` before parsing.
    ///
    /// The local port wins whenever it is set; otherwise the remote port is
    /// used. There is no invented default: a step with neither option set is
    /// a configuration error.
    pub fn fitnesse_port(&self, ctx: &BuildContext) -> ConfigResult<u16> {
        let (key, value) = match &self.port {
            Some(PortBinding::Local(v)) => (OptionKey::FitnessePortLocal, v),
            Some(PortBinding::Remote(v)) => (OptionKey::FitnessePortRemote, v),
            None => return Err(ConfigError::PortUnset),
        };

        value
            .expand(ctx)
            .parse()
            .map_err(|_| ConfigError::MalformedNumber {
                key,
                value: value.raw().to_string(),
            })
    }

    /// Hostname of an externally managed server, expanded against `ctx`.
    ///
    /// Only meaningful when `start()` is false. Unset resolves to the empty
    /// string; tokens without a binding pass through literally.
    pub fn host(&self, ctx: &BuildContext) -> String {
        self.host
            .as_ref()
            .map(|v| v.expand(ctx))
            .unwrap_or_default()
    }

    /// Timeout for HTTP result polling; 60s unless HTTP_TIMEOUT is set.
    pub fn http_timeout(&self) -> ConfigResult<Duration> {
        match &self.http_timeout {
            None => Ok(DEFAULT_HTTP_TIMEOUT),
            Some(raw) => raw
                .parse()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::MalformedNumber {
                    key: OptionKey::HttpTimeout,
                    value: raw.clone(),
                }),
        }
    }

    /// Path to the fitnesse.jar archive, or "" when unset.
    pub fn path_to_jar(&self) -> &str {
        self.path_to_jar.as_deref().unwrap_or_default()
    }

    /// Working directory for the launched java process.
    ///
    /// An explicit JAVA_WORKING_DIRECTORY wins outright. Otherwise the
    /// parent component of PATH_TO_JAR, derived purely from the path string
    /// (the jar does not have to exist), preserving the absolute or relative
    /// form it was given in. A bare filename or an unset jar path resolves
    /// to "".
    pub fn java_working_directory(&self) -> String {
        if let Some(dir) = &self.java_working_directory {
            return dir.clone();
        }
        self.path_to_jar
            .as_deref()
            .and_then(|jar| Path::new(jar).parent())
            .map(|parent| parent.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
