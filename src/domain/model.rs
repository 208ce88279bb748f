use serde::Deserialize;
use std::fmt;

/// Exit code plus the raw bytes a child process wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub code: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// The three positional arguments of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneRequest {
    pub repository: String,
    pub directory: String,
    pub checkout: String,
}

/// How captured child output is turned into text before it is relayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Invalid UTF-8 sequences become U+FFFD.
    #[default]
    Lossy,
    /// Invalid UTF-8 is an encoding error.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    ConfigureCredentials,
    RegisterHostKey,
    Clone,
    Checkout,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::ConfigureCredentials => "configure credentials",
            Step::RegisterHostKey => "register host key",
            Step::Clone => "clone",
            Step::Checkout => "checkout",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    Completed,
    Failed { step: Step, code: i32 },
}

impl FlowOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            FlowOutcome::Completed => 0,
            FlowOutcome::Failed { code, .. } => *code,
        }
    }
}
