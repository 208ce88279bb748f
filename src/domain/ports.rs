use crate::domain::model::ProcessOutput;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Runs one external program to completion and hands back everything it wrote.
///
/// `argv[0]` is the program, the rest are its arguments. No shell is involved.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    async fn execute(&self, argv: &[String]) -> Result<ProcessOutput>;
}
