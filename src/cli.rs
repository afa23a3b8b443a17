use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

mod browse;
mod init;
mod render;
mod show;
mod terminal;

use anyhow::Context;
use browse::Browse;
use clap::ArgAction;
use faq::{Config, FaqView, HttpReleaseNotes, QueryClient, QueryOptions};
use indicatif::ProgressBar;
use init::Init;
use show::Show;
use tracing::{debug, instrument};

/// Configuration file read when `--config` is not given.
const DEFAULT_CONFIG_FILE: &str = "faq.toml";

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    settings: Settings,

    #[command(subcommand)]
    command: Option<Command>,
}

/// Where the configuration comes from, and what overrides it.
#[derive(Debug, clap::Args)]
struct Settings {
    /// Path to the configuration file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILE, global = true)]
    config: PathBuf,

    /// Override the API base URL from the configuration
    #[arg(long, value_name = "URL", global = true)]
    base_url: Option<String>,

    /// Accept invalid TLS certificates (development servers only)
    #[arg(long, global = true)]
    insecure: bool,
}

impl Settings {
    /// Loads the configuration file and applies command-line overrides.
    ///
    /// A missing file is only an error when it was named explicitly.
    #[instrument(level = "debug", skip(self), fields(path = %self.config.display()))]
    fn load(&self) -> anyhow::Result<Config> {
        let mut config = if !self.config.exists() && self.config == Path::new(DEFAULT_CONFIG_FILE) {
            debug!("no configuration file, using defaults");
            Config::default()
        } else {
            Config::load(&self.config)
                .with_context(|| format!("Failed to load {}", self.config.display()))?
        };

        if let Some(base_url) = &self.base_url {
            config.api_base_url.clone_from(base_url);
        }
        if self.insecure {
            config.accept_invalid_certs = true;
        }
        Ok(config)
    }
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command
            .unwrap_or_else(|| Command::Show(Show::default()))
            .run(&self.settings)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Render the FAQ once (default)
    Show(Show),

    /// Browse the FAQ interactively
    ///
    /// Type a search term, toggle categories and expand answers.
    Browse(Browse),

    /// Write a default configuration file
    Init(Init),
}

impl Command {
    fn run(self, settings: &Settings) -> anyhow::Result<()> {
        match self {
            Self::Show(command) => command.run(&settings.load()?)?,
            Self::Browse(command) => command.run(&settings.load()?)?,
            Self::Init(command) => command.run(&settings.config)?,
        }
        Ok(())
    }
}

/// Mounts the FAQ view on a fresh request cache.
fn mount(config: &Config) -> anyhow::Result<FaqView> {
    let source = HttpReleaseNotes::new(config).context("Failed to build HTTP client")?;
    debug!(url = source.url(), "fetching release notes");

    let client = Arc::new(QueryClient::new(QueryOptions {
        retry: config.retry,
    }));
    Ok(FaqView::mount(client, Arc::new(source)))
}

/// Shows a spinner until the release notes have arrived or failed.
fn wait_with_spinner(view: &FaqView, timeout: Option<Duration>) {
    let spinner = ProgressBar::new_spinner();
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message("Loading release notes...");

    let state = view.wait(timeout);
    spinner.finish_and_clear();
    debug!(status = ?state.status(), "stopped waiting for release notes");
}
