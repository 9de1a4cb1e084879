//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ExplorerConfig;
use crate::error::{Error, Result};
use crate::pagination::{Outcome, PaginationController, PaginationObserver};
use crate::types::Character;
use std::io::Write;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Observer that reports controller notifications through tracing
#[derive(Debug, Default)]
struct ProgressObserver;

impl PaginationObserver for ProgressObserver {
    fn on_loading_changed(&mut self, loading: bool) {
        if loading {
            debug!("Loading characters...");
        }
    }

    fn on_items_fetched(&mut self) {
        debug!("Characters fetched");
    }

    fn on_error(&mut self, message: &str) {
        error!("{message}");
    }
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, writing results to stdout
    pub async fn run(&self) -> Result<()> {
        let mut out = std::io::stdout();
        self.run_to(&mut out).await
    }

    /// Run the CLI command, writing results to `out`
    pub async fn run_to(&self, out: &mut impl Write) -> Result<()> {
        let config = self.load_config()?;
        match &self.cli.command {
            Commands::List { status, pages } => {
                let status = status.as_deref().or(config.default_status.as_deref());
                self.list(&config, status, *pages, out).await
            }
            Commands::Detail { id } => self.detail(&config, *id, out).await,
        }
    }

    /// Resolve configuration: file first, then command-line overrides
    fn load_config(&self) -> Result<ExplorerConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ExplorerConfig::from_file(path)?,
            None => ExplorerConfig::default(),
        };

        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
            config.validate()?;
        }

        debug!("Using API at {}", config.base_url);
        Ok(config)
    }

    async fn list(
        &self,
        config: &ExplorerConfig,
        status: Option<&str>,
        pages: u32,
        out: &mut impl Write,
    ) -> Result<()> {
        let client = config.build_client()?;
        let mut controller =
            PaginationController::new(Arc::new(client)).with_observer(ProgressObserver);

        match status {
            Some(status) => controller.apply_filter(status),
            None => {
                controller.load_next();
            }
        }

        let mut printed = 0;
        for loaded in 0..pages {
            if loaded > 0 {
                if controller.reached_end() {
                    info!("Reached the last page");
                    break;
                }
                controller.load_next();
            }

            match controller.process_completion().await {
                Some(Outcome::Fetched(_)) => {
                    for character in &controller.items()[printed..] {
                        self.write_character(character, out)?;
                    }
                    printed = controller.items().len();
                }
                Some(Outcome::Failed(e)) => return Err(Error::Fetch(e)),
                None => break,
            }
        }

        info!(
            "Listed {} characters (filter: {})",
            printed,
            controller.filter().unwrap_or("none")
        );
        Ok(())
    }

    async fn detail(&self, config: &ExplorerConfig, id: u64, out: &mut impl Write) -> Result<()> {
        let client = config.build_client()?;
        let character = client.fetch_character(id).await?;
        let detail = character.detail();

        match self.cli.format {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&detail)?)?,
            OutputFormat::Pretty => writeln!(out, "{detail}")?,
        }
        Ok(())
    }

    fn write_character(&self, character: &Character, out: &mut impl Write) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(character)?)?,
            OutputFormat::Pretty => writeln!(
                out,
                "#{:<5} {:<30} {:<8} {}",
                character.id, character.name, character.status, character.species
            )?,
        }
        Ok(())
    }
}
