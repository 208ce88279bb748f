use anyhow::Context;
use clap::Parser;
use git_init::utils::{logger, validation::Validate};
use git_init::{CliConfig, GitInitError, GitInitFlow, InitSettings, ProcessRunner, SystemExecutor};

fn load_settings(config: &CliConfig) -> anyhow::Result<InitSettings> {
    let settings = match &config.config {
        Some(path) => InitSettings::from_file(path)
            .with_context(|| format!("failed to load config file '{}'", path))?,
        None => InitSettings::default(),
    };
    settings.validate().context("invalid configuration")?;
    Ok(settings.with_debug(config.verbose))
}

async fn run(config: &CliConfig, settings: InitSettings) -> anyhow::Result<i32> {
    let runner = ProcessRunner::new(
        SystemExecutor::new(),
        std::io::stdout(),
        std::io::stderr(),
        settings.decode,
    );
    let mut flow = GitInitFlow::new(settings, runner);

    let outcome = flow
        .run(&config.clone_request())
        .await
        .with_context(|| format!("git init of '{}' aborted", config.repository))?;
    Ok(outcome.exit_code())
}

fn exit_code_of(e: &anyhow::Error) -> i32 {
    e.downcast_ref::<GitInitError>()
        .map(GitInitError::exit_code)
        .unwrap_or(1)
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    let settings = match load_settings(&config) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            std::process::exit(exit_code_of(&e));
        }
    };

    logger::init_cli_logger(settings.debug);

    tracing::info!("Starting git-init");
    tracing::debug!("CLI config: {:?}", config);
    tracing::debug!("Settings: {:?}", settings);

    let code = match run(&config, settings).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("❌ {:#}", e);
            exit_code_of(&e)
        }
    };

    std::process::exit(code);
}
