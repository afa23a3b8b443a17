use std::{process, time::Duration};

use clap::Parser;
use faq::{Body, Category, Config};
use tracing::instrument;

use super::render::{self, OutputFormat};

#[derive(Debug, Parser, Default)]
#[command(about = "Render the FAQ once")]
pub struct Show {
    /// Case-insensitive text to find in questions and answers
    #[arg(short, long, default_value = "")]
    search: String,

    /// Only show entries in this category
    #[arg(short, long)]
    category: Option<Category>,

    /// Expand the entry at this position in the displayed list (1-based)
    #[arg(short, long, value_name = "N", value_parser = parse_position)]
    expand: Option<usize>,

    /// Output format (table, json)
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,

    /// Print only the matching questions, one per line (table output only)
    #[arg(long, conflicts_with = "output")]
    quiet: bool,

    /// Stop waiting for the release notes after this many seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,
}

fn parse_position(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("positions start at 1".to_string()),
        Ok(position) => Ok(position),
        Err(e) => Err(e.to_string()),
    }
}

impl Show {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let mut view = super::mount(config)?;
        super::wait_with_spinner(&view, self.timeout.map(Duration::from_secs));

        let ui = view.ui_mut();
        ui.set_search_term(self.search);
        if let Some(category) = self.category {
            ui.select_category(category);
        }
        if let Some(position) = self.expand {
            ui.toggle_item(position - 1);
        }

        let screen = view.screen();
        render::print(&screen, self.output, self.quiet)?;

        // Non-zero exit when the release notes could not be fetched.
        if matches!(screen.body, Body::Error(_)) {
            process::exit(2);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_one_based() {
        assert_eq!(parse_position("1"), Ok(1));
        assert!(parse_position("0").is_err());
        assert!(parse_position("-1").is_err());
    }
}
