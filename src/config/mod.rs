pub mod settings;

#[cfg(feature = "cli")]
use crate::domain::model::CloneRequest;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "git-init", version)]
#[command(about = "Clone a git repository and check out a branch, tag or commit")]
pub struct CliConfig {
    #[arg(help = "The repository URL")]
    pub repository: String,

    #[arg(help = "The directory to clone into")]
    pub directory: String,

    #[arg(help = "The branch/commit id/tag to checkout")]
    pub checkout: String,

    #[arg(
        short,
        long,
        env = "GIT_INIT_DEBUG",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Run diagnostic commands and log at debug level"
    )]
    pub verbose: bool,

    #[arg(long, env = "GIT_INIT_CONFIG", help = "TOML file overriding the default paths")]
    pub config: Option<String>,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn clone_request(&self) -> CloneRequest {
        CloneRequest {
            repository: self.repository.clone(),
            directory: self.directory.clone(),
            checkout: self.checkout.clone(),
        }
    }
}
