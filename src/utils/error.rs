use std::io::ErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitInitError {
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' wrote invalid UTF-8 to {stream}")]
    Encoding { program: String, stream: &'static str },

    #[error("'{program}' terminated without an exit status")]
    Terminated { program: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration value for '{field}': '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl GitInitError {
    /// Process exit code reported when the program itself fails, as opposed
    /// to a step whose tool exits non-zero.
    pub fn exit_code(&self) -> i32 {
        match self {
            GitInitError::Spawn { source, .. } => match source.kind() {
                ErrorKind::NotFound => 127,
                ErrorKind::PermissionDenied => 126,
                _ => 1,
            },
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, GitInitError>;
