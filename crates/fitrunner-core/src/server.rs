//! Collaborator interfaces for the FitNesse server lifecycle.
//!
//! The process launcher and the results fetcher live outside this crate;
//! these types are the scalars they consume and the seams they implement.

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use futures::stream::BoxStream;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::Result;

/// Everything the process launcher needs to start a FitNesse server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchSpec {
    /// Path to the fitnesse.jar archive.
    pub jar_path: String,
    /// Working directory for the java process; empty means the build's own
    /// working directory.
    pub working_dir: String,
    /// Port the server should listen on.
    pub port: u16,
}

/// Everything the HTTP client needs to reach a running server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpTarget {
    /// Hostname of the server.
    pub host: String,
    /// Port the server listens on.
    pub port: u16,
    /// Per-request timeout.
    pub timeout: Duration,
}

/// Handle to a launched server instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerHandle {
    /// Name of the launcher that owns this instance.
    pub launcher: String,
    /// Launcher-specific identifier (pid, container id, ...).
    pub instance: String,
}

/// Lifecycle of a launched server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ServerStatus {
    /// Process spawned, not yet accepting requests.
    Starting,
    /// Accepting requests.
    Running { started_at: DateTime<Utc> },
    /// Process exited.
    Exited {
        finished_at: DateTime<Utc>,
        exit_code: Option<i32>,
    },
}

impl ServerStatus {
    pub fn is_exited(&self) -> bool {
        matches!(self, ServerStatus::Exited { .. })
    }
}

/// A line of output from the launched process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogLine {
    pub timestamp: DateTime<Utc>,
    pub stream: LogStream,
    pub content: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum LogStream {
    Stdout,
    Stderr,
}

/// Trait for FitNesse process launchers.
#[async_trait]
pub trait ServerLauncher: Send + Sync {
    /// Name of this launcher.
    fn name(&self) -> &'static str;

    /// Spawn a new server instance.
    async fn launch(&self, spec: LaunchSpec) -> Result<ServerHandle>;

    /// Stream log output from a launched instance.
    async fn logs(&self, handle: &ServerHandle) -> Result<BoxStream<'static, LogLine>>;

    /// Current status of an instance.
    async fn status(&self, handle: &ServerHandle) -> Result<ServerStatus>;

    /// Stop an instance.
    async fn shutdown(&self, handle: &ServerHandle) -> Result<()>;
}

/// Trait for fetching test-result pages over HTTP.
///
/// Payloads stay opaque here; parsing the result markup belongs to the
/// caller.
#[async_trait]
pub trait ResultsSource: Send + Sync {
    /// Fetch the result page for a test page by name.
    async fn fetch(&self, target: &HttpTarget, page: &str) -> Result<Bytes>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    struct StubLauncher;

    #[async_trait]
    impl ServerLauncher for StubLauncher {
        fn name(&self) -> &'static str {
            "stub"
        }

        async fn launch(&self, spec: LaunchSpec) -> Result<ServerHandle> {
            Ok(ServerHandle {
                launcher: self.name().to_string(),
                instance: format!("stub-{}", spec.port),
            })
        }

        async fn logs(&self, _handle: &ServerHandle) -> Result<BoxStream<'static, LogLine>> {
            let lines = vec![LogLine {
                timestamp: Utc::now(),
                stream: LogStream::Stdout,
                content: "FitNesse ready".to_string(),
            }];
            Ok(futures::stream::iter(lines).boxed())
        }

        async fn status(&self, _handle: &ServerHandle) -> Result<ServerStatus> {
            Ok(ServerStatus::Running {
                started_at: Utc::now(),
            })
        }

        async fn shutdown(&self, _handle: &ServerHandle) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn launcher_reports_instance_and_status() {
        let launcher = StubLauncher;
        let spec = LaunchSpec {
            jar_path: "fitnesse.jar".to_string(),
            working_dir: String::new(),
            port: 8080,
        };

        let handle = launcher.launch(spec).await.unwrap();
        assert_eq!(handle.instance, "stub-8080");
        assert!(!launcher.status(&handle).await.unwrap().is_exited());

        let lines: Vec<_> = launcher.logs(&handle).await.unwrap().collect().await;
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].content, "FitNesse ready");

        launcher.shutdown(&handle).await.unwrap();
    }
}
