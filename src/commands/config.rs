// Config command - show the effective configuration

use anyhow::{Context, Result};

use crate::cli::ReporterArgs;
use crate::config::Config;

/// Apply command-line overrides on top of the file configuration
pub fn effective_config(file: Option<Config>, overrides: &ReporterArgs) -> Config {
    let mut config = file.unwrap_or_default();

    if let Some(suite) = &overrides.suite {
        config.junit_reporter.suite = suite.clone();
    }
    if let Some(output_dir) = &overrides.output_dir {
        config.junit_reporter.output_dir = output_dir.clone();
    }
    if let Some(output_file) = &overrides.output_file {
        config.junit_reporter.output_file = Some(output_file.clone());
    }
    if let Some(base_path) = &overrides.base_path {
        config.base_path = Some(base_path.clone());
    }

    config
}

pub fn handle_config(config: &Config) -> Result<()> {
    let mut shown = config.clone();
    shown.base_path = Some(config.resolved_base_path());

    let rendered = shown.to_toml().context("Failed to render configuration")?;
    print!("{}", rendered);
    Ok(())
}
