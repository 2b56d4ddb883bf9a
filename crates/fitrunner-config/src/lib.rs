//! Build-step option resolution for the fitrunner CI plugin.
//!
//! This crate handles:
//! - The persisted option mapping of a build step (`StepOptions`)
//! - Build-variable interpolation (`BuildContext`)
//! - Typed resolution of runtime parameters (`StepConfig`)
//! - Assembly of the execution plan handed to the launcher and HTTP client

pub mod error;
pub mod options;
pub mod plan;
pub mod resolver;
pub mod variables;

pub use error::{ConfigError, ConfigResult};
pub use options::StepOptions;
pub use plan::ExecutionPlan;
pub use resolver::StepConfig;
pub use variables::{BuildContext, ConfigValue};
