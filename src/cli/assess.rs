//! Assess command - score a response set and render the report

use crate::config::AssessmentConfig;
use crate::engine;
use crate::models::ResponseSet;
use crate::reporters;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Run the assess command
pub fn run(
    input: Option<&Path>,
    format: &str,
    output: Option<&Path>,
    config_path: Option<&Path>,
    no_benchmark: bool,
    no_insights: bool,
) -> Result<()> {
    let responses = read_responses(input)?;

    let mut config = AssessmentConfig::load(config_path, Path::new("."));
    if no_benchmark {
        config.report.show_benchmarks = false;
    }
    if no_insights {
        config.report.show_insights = false;
    }

    let report = engine::assess(&responses, &config);
    let rendered = reporters::report(&report, &config.branding, format)?;

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Report written to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Read the responses document from a file or stdin.
///
/// Malformed JSON is a transport-level error; missing or unknown keys
/// inside valid JSON are handled by the engine's fail-open defaults.
fn read_responses(input: Option<&Path>) -> Result<ResponseSet> {
    let content = match input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        _ => {
            debug!("Reading responses from stdin");
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read responses from stdin")?;
            buf
        }
    };

    serde_json::from_str(&content).context("Responses document is not valid JSON")
}
