//! Levels command - print the maturity level band table

use crate::engine::classifier;
use crate::models::MaturityLevel;
use anyhow::Result;
use console::style;

/// Run the levels command
pub fn run() -> Result<()> {
    println!("\n{}\n", style("Job IQ Maturity Levels").bold());
    println!("  {}", style("LEVEL  NAME        SCORE").dim());
    println!("  {}", style("────────────────────────").dim());

    for level in MaturityLevel::ALL {
        let (lo, hi) = level.band();
        println!(
            "  {:<5}  {:<10}  {:>2}-{:<2}",
            level.number(),
            level.name(),
            lo,
            hi
        );
    }

    println!();
    for level in MaturityLevel::ALL {
        let summary = classifier::level_description(level)
            .split("\n\n")
            .next()
            .unwrap_or("")
            .replace("**", "");
        println!(
            "{} {}",
            style(format!("Level {} — {}:", level.number(), level.name())).bold(),
            summary
        );
        println!();
    }

    Ok(())
}
