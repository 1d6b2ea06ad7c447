//! Init command - write a commented jobiq.toml template

use crate::config::{AssessmentConfig, CONFIG_FILE};
use anyhow::{Context, Result};
use console::style;
use std::path::Path;

/// Run the init command
pub fn run() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE);

    if config_path.exists() {
        println!(
            "{} {} already exists, leaving it untouched",
            style("✓").green(),
            style(CONFIG_FILE).cyan()
        );
        return Ok(());
    }

    std::fs::write(config_path, AssessmentConfig::example_toml())
        .with_context(|| format!("Failed to write {}", CONFIG_FILE))?;

    println!(
        "{} Created {} with example settings",
        style("✓").green(),
        style(CONFIG_FILE).cyan()
    );
    println!("\nEdit it to customize branding, report options, and benchmarks.");

    Ok(())
}
