//! Execution-ready parameter bundle for the collaborators.

use crate::error::ConfigResult;
use crate::resolver::StepConfig;
use crate::variables::BuildContext;
use fitrunner_core::server::{HttpTarget, LaunchSpec};
use tracing::debug;

/// Host the HTTP client polls when the plugin starts the server itself.
const LOCAL_HOST: &str = "localhost";

/// Resolved, typed, expanded values for one build run.
///
/// `launch` is present only when the step starts its own server; `target`
/// always points at the instance the HTTP client should poll.
#[derive(Debug, Clone)]
pub struct ExecutionPlan {
    pub launch: Option<LaunchSpec>,
    pub target: HttpTarget,
}

impl ExecutionPlan {
    /// Resolve everything the launcher and HTTP client need for one run.
    pub fn prepare(config: &StepConfig, ctx: &BuildContext) -> ConfigResult<Self> {
        let port = config.fitnesse_port(ctx)?;
        let timeout = config.http_timeout()?;

        let (launch, host) = if config.start() {
            let spec = LaunchSpec {
                jar_path: config.path_to_jar().to_string(),
                working_dir: config.java_working_directory(),
                port,
            };
            (Some(spec), LOCAL_HOST.to_string())
        } else {
            (None, config.host(ctx))
        };

        let plan = Self {
            launch,
            target: HttpTarget {
                host,
                port,
                timeout,
            },
        };

        debug!(
            start = plan.launch.is_some(),
            host = %plan.target.host,
            port = plan.target.port,
            timeout_ms = plan.target.timeout.as_millis() as u64,
            "prepared execution plan"
        );

        Ok(plan)
    }
}
