use crate::config::settings::InitSettings;
use crate::core::commands;
use crate::core::runner::ProcessRunner;
use crate::domain::hostname::HostnameStages;
use crate::domain::model::{CloneRequest, FlowOutcome, Step};
use crate::domain::ports::CommandExecutor;
use crate::utils::error::Result;
use std::io::Write;
use tracing::{debug, error, info, warn};

/// Credential setup, optional host-key trust, clone and checkout, in that
/// order. The first step whose tool exits non-zero ends the run.
pub struct GitInitFlow<E, O, W> {
    settings: InitSettings,
    runner: ProcessRunner<E, O, W>,
}

impl<E, O, W> GitInitFlow<E, O, W>
where
    E: CommandExecutor,
    O: Write,
    W: Write,
{
    pub fn new(settings: InitSettings, runner: ProcessRunner<E, O, W>) -> Self {
        Self { settings, runner }
    }

    pub async fn run(&mut self, request: &CloneRequest) -> Result<FlowOutcome> {
        let argv = commands::configure_credentials(&self.settings);
        if let Some(failed) = self.run_step(Step::ConfigureCredentials, &argv).await? {
            return Ok(failed);
        }

        if self.settings.ssh_key_present() {
            let stages = HostnameStages::of(&request.repository);
            for (index, stage) in stages.as_array().iter().enumerate() {
                debug!("hostname stage {}: {}", index + 1, stage);
            }

            let argv = commands::register_host_key(&self.settings, stages.host);
            if let Some(failed) = self.run_step(Step::RegisterHostKey, &argv).await? {
                return Ok(failed);
            }

            if self.settings.debug {
                self.run_diagnostic(&commands::list_ssh_identities()).await;
                let argv = commands::show_known_hosts(&self.settings);
                self.run_diagnostic(&argv).await;
            }
        } else {
            debug!(
                "No SSH key at {}, skipping host key registration",
                self.settings.ssh_key_path
            );
        }

        let argv = commands::clone(&self.settings, request);
        if let Some(failed) = self.run_step(Step::Clone, &argv).await? {
            return Ok(failed);
        }

        if self.settings.debug {
            self.run_diagnostic(&commands::list_directory(request)).await;
        }

        let argv = commands::checkout(&self.settings, request);
        if let Some(failed) = self.run_step(Step::Checkout, &argv).await? {
            return Ok(failed);
        }

        if self.settings.debug {
            let argv = commands::status(&self.settings, request);
            self.run_diagnostic(&argv).await;
        }

        info!("Checked out '{}' in {}", request.checkout, request.directory);
        Ok(FlowOutcome::Completed)
    }

    async fn run_step(&mut self, step: Step, argv: &[String]) -> Result<Option<FlowOutcome>> {
        info!("Step: {}", step);
        let code = self.runner.run(argv).await?;
        if code == 0 {
            return Ok(None);
        }

        error!("Step '{}' failed with exit code {}", step, code);
        Ok(Some(FlowOutcome::Failed { step, code }))
    }

    /// Output is relayed like any other command; the result never affects the run.
    async fn run_diagnostic(&mut self, argv: &[String]) {
        match self.runner.run(argv).await {
            Ok(code) => debug!("{} exited with {}", argv.join(" "), code),
            Err(e) => warn!("Diagnostic command {} failed: {}", argv.join(" "), e),
        }
    }

    pub fn into_runner(self) -> ProcessRunner<E, O, W> {
        self.runner
    }
}
