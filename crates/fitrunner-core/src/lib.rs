//! Core domain types for the fitrunner CI plugin.
//!
//! This crate contains:
//! - The fixed option-key set of a FitNesse build step
//! - The scalar values handed to the process launcher and HTTP client
//! - The `ServerLauncher` and `ResultsSource` collaborator traits

pub mod error;
pub mod options;
pub mod server;

pub use error::{Error, Result};
pub use options::OptionKey;
