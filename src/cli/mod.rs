//! CLI command definitions and handlers

mod assess;
mod init;
mod levels;
mod questions;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// jobiq - Job IQ maturity assessment
///
/// Scores job & skills data maturity across 7 dimensions and generates
/// tailored recommendations. Runs entirely locally; nothing is stored.
#[derive(Parser, Debug)]
#[command(name = "jobiq")]
#[command(
    version,
    about = "Job IQ maturity assessment — score job & skills data maturity across 7 dimensions",
    long_about = "jobiq scores an organization's job & skills data maturity from a 20-question \
questionnaire: per-dimension scores (0-4), a total Job IQ (0-28), a maturity level \
(Ad Hoc through Optimized), and a ranked set of recommendations.\n\n\
Responses are read as a JSON document; run `jobiq questions --format json` to see the \
expected keys and answer options.",
    after_help = "\
Examples:
  jobiq assess -i responses.json         Score a saved response set
  cat responses.json | jobiq assess      Score responses from stdin
  jobiq assess -i r.json --format md -o report.md   Write a Markdown report
  jobiq questions                        Print the questionnaire
  jobiq levels                           Print the maturity level bands

Documentation: https://jdxpert.com"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Path to a jobiq.toml config file (default: ./jobiq.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a response set and render the assessment report
    #[command(after_help = "\
Examples:
  jobiq assess -i responses.json                 Terminal report
  jobiq assess -i responses.json --format json   JSON for scripting
  jobiq assess -i responses.json --format md -o report.md
  cat responses.json | jobiq assess              Read from stdin
  jobiq assess -i responses.json --no-benchmark  Skip the industry overlay")]
    Assess {
        /// Responses JSON file ('-' or omitted: read stdin)
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,

        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json", "markdown", "md"])]
        format: String,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Skip the industry benchmark overlay
        #[arg(long)]
        no_benchmark: bool,

        /// Skip the auto-generated insights
        #[arg(long)]
        no_insights: bool,
    },

    /// Print the questionnaire (keys, prompts, and answer options)
    Questions {
        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Print the maturity level bands
    Levels,

    /// Write a commented jobiq.toml template to the current directory
    Init,

    /// Show version information
    Version,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Assess {
            input,
            format,
            output,
            no_benchmark,
            no_insights,
        }) => assess::run(
            input.as_deref(),
            &format,
            output.as_deref(),
            cli.config.as_deref(),
            no_benchmark,
            no_insights,
        ),

        Some(Commands::Questions { format }) => questions::run(&format),

        Some(Commands::Levels) => levels::run(),

        Some(Commands::Init) => init::run(),

        Some(Commands::Version) => {
            println!("jobiq {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }

        // Default: assess from stdin
        None => assess::run(
            None,
            "text",
            None,
            cli.config.as_deref(),
            false,
            false,
        ),
    }
}
