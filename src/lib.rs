pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::SystemExecutor;
pub use config::settings::InitSettings;
pub use crate::core::{flow::GitInitFlow, runner::ProcessRunner};
pub use domain::hostname::extract_hostname;
pub use domain::model::{CloneRequest, DecodePolicy, FlowOutcome, ProcessOutput, Step};
pub use utils::error::{GitInitError, Result};
