//! [`CommandExecutor`] backed by [`tokio::process::Command`].

use std::io;
use std::process::{ExitStatus, Stdio};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, instrument};

use crate::domain::model::ProcessOutput;
use crate::domain::ports::CommandExecutor;
use crate::utils::error::{GitInitError, Result};

/// Spawns real child processes. stdin is inherited, stdout and stderr are captured.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor;

impl SystemExecutor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandExecutor for SystemExecutor {
    #[instrument(skip_all, fields(program = argv.first().map(String::as_str).unwrap_or("")))]
    async fn execute(&self, argv: &[String]) -> Result<ProcessOutput> {
        let (program, args) = argv.split_first().ok_or_else(|| GitInitError::Spawn {
            program: String::new(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "empty command line"),
        })?;

        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        debug!(?args, "spawning");

        let output = cmd.output().await.map_err(|source| GitInitError::Spawn {
            program: program.clone(),
            source,
        })?;

        let code = exit_code(output.status).ok_or_else(|| GitInitError::Terminated {
            program: program.clone(),
        })?;

        debug!(code, "exited");

        Ok(ProcessOutput {
            code,
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

/// Exit code of a finished child. A child killed by a signal reports `128 + signal`.
fn exit_code(status: ExitStatus) -> Option<i32> {
    if let Some(code) = status.code() {
        return Some(code);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return Some(128 + signal);
        }
    }

    None
}
