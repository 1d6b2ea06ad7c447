//! Questions command - print the questionnaire catalog

use crate::catalog::{self, QuestionKind};
use anyhow::Result;
use console::style;

/// Run the questions command
pub fn run(format: &str) -> Result<()> {
    match format {
        "json" => print_json(),
        _ => {
            print_text();
            Ok(())
        }
    }
}

fn print_json() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&catalog::QUESTIONS.as_slice())?);
    Ok(())
}

fn print_text() {
    println!("\n{}\n", style("Job IQ Questionnaire").bold());

    let descriptions = catalog::dimension_descriptions();
    let mut last_dim = None;
    for question in &catalog::QUESTIONS {
        if last_dim != Some(question.dimension) {
            println!(
                "{}",
                style(format!(
                    "{}. {}",
                    question.dimension.index() + 1,
                    question.dimension.name()
                ))
                .cyan()
                .bold()
            );
            if let Some(desc) = descriptions
                .iter()
                .find(|d| d.dimension == question.dimension)
            {
                println!("   {}", style(desc.why_it_matters).dim());
            }
            last_dim = Some(question.dimension);
        }

        println!("   {}", style(question.prompt).italic());
        match question.kind {
            QuestionKind::Checkboxes => {
                for item in question.items {
                    println!("     [ ] {}  {}", item.label, style(format!("({})", item.key)).dim());
                }
            }
            _ => {
                println!("     {}", style(format!("key: {}", question.key)).dim());
                for option in question.options {
                    println!("     - {}", option);
                }
            }
        }
        println!();
    }

    println!("{}", style("Answer with a JSON document, e.g.:").bold());
    println!(
        "  {{\"coverage\": \"50-74%\", \"velocity\": \"3-7 days\", \"arch_comp\": true, ...}}\n"
    );
}
