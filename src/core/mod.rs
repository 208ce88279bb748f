pub mod commands;
pub mod flow;
pub mod runner;

pub use crate::domain::model::{CloneRequest, DecodePolicy, FlowOutcome, ProcessOutput, Step};
pub use crate::domain::ports::CommandExecutor;
pub use crate::utils::error::Result;
