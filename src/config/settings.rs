use crate::domain::model::DecodePolicy;
use crate::utils::error::{GitInitError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_GIT_PROGRAM: &str = "git";
pub const DEFAULT_SSH_KEY_PATH: &str = "/etc/theia-cloud-ssh/id_theiacloud";
pub const DEFAULT_KEYSCAN_SCRIPT: &str = "/tmp/ssh-keyscan.sh";
pub const DEFAULT_KNOWN_HOSTS: &str = "/root/.ssh/known_hosts";

/// Everything a run needs besides its three positional arguments.
///
/// Every key may be omitted from the TOML file; missing keys take the
/// defaults of the init container image.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InitSettings {
    pub git_program: String,
    /// Trust setup runs only when this file exists.
    pub ssh_key_path: String,
    pub keyscan_script: String,
    pub known_hosts: String,
    /// Enables the diagnostic commands (`ssh-add -l`, `ls -al`, `git status`, ...).
    pub debug: bool,
    pub decode: DecodePolicy,
}

impl Default for InitSettings {
    fn default() -> Self {
        Self {
            git_program: DEFAULT_GIT_PROGRAM.to_string(),
            ssh_key_path: DEFAULT_SSH_KEY_PATH.to_string(),
            keyscan_script: DEFAULT_KEYSCAN_SCRIPT.to_string(),
            known_hosts: DEFAULT_KNOWN_HOSTS.to_string(),
            debug: false,
            decode: DecodePolicy::default(),
        }
    }
}

impl InitSettings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GitInitError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GitInitError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the value of `VAR`; unset variables are kept as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GitInitError::Config {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = self.debug || debug;
        self
    }

    pub fn ssh_key_present(&self) -> bool {
        Path::new(&self.ssh_key_path).is_file()
    }
}

impl Validate for InitSettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("git_program", &self.git_program)?;
        validate_path("git_program", &self.git_program)?;
        validate_path("ssh_key_path", &self.ssh_key_path)?;
        validate_path("keyscan_script", &self.keyscan_script)?;
        validate_path("known_hosts", &self.known_hosts)?;
        Ok(())
    }
}
