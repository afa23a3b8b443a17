use std::path::Path;

use anyhow::Context;
use clap::Parser;
use faq::Config;
use tracing::instrument;

#[derive(Debug, Parser)]
#[command(about = "Write a default configuration file")]
pub struct Init {
    /// Overwrite an existing configuration file
    #[arg(long)]
    force: bool,
}

impl Init {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, path: &Path) -> anyhow::Result<()> {
        if path.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                path.display()
            );
        }

        Config::default()
            .save(path)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        println!("Wrote default configuration to {}", path.display());
        Ok(())
    }
}
