//! Configuration resolution errors.

use fitrunner_core::OptionKey;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("KDL parse error: {0}")]
    Parse(#[from] kdl::KdlError),

    #[error("option {key} has a non-numeric value: {value:?}")]
    MalformedNumber { key: OptionKey, value: String },

    #[error("no FitNesse port configured: set FITNESSE_PORT_LOCAL or FITNESSE_PORT_REMOTE")]
    PortUnset,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
