//! Concepts command - list synonym groups

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::synonyms::SynonymGroup;
use clap::Args;
use std::sync::Arc;

/// Arguments for the list-concepts command
#[derive(Args, Debug)]
pub struct ConceptsArgs {
    /// Show only this concept (or the concept a surface form maps to)
    #[arg(long, short = 'c')]
    pub concept: Option<String>,
}

/// Execute the list-concepts command
pub async fn execute(
    args: ConceptsArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let table = services.engine.synonyms();

    let groups: Vec<&SynonymGroup> = match &args.concept {
        Some(name) => {
            let key = name.trim().to_lowercase();
            let group = table
                .group(&key)
                .or_else(|| table.canonical(&key).and_then(|c| table.group(c)))
                .ok_or_else(|| {
                    format!(
                        "Concept '{name}' not found. Run 'medibot list-concepts' to see available concepts."
                    )
                })?;
            vec![group]
        }
        None => table.groups().iter().collect(),
    };

    match format {
        OutputFormat::Human => {
            if args.concept.is_none() {
                output::print_header(&format!("{} concept groups", groups.len()));
            }
            for group in &groups {
                println!(
                    "{} {}",
                    colors::concept(&group.concept),
                    colors::dim(&format!("({})", group.forms.len()))
                );
                println!("    {}", group.forms.join(", "));
            }
        }
        OutputFormat::Json => output::print_json(&groups)?,
    }

    Ok(())
}
