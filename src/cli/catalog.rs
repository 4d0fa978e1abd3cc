use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::catalog::store::GestureCatalog;
use crate::cli::OutputFormat;
use crate::core::gesture::Gesture;
use crate::matching::engine::{MatchingConfig, MatchingEngine};

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List the distinct gestures in a catalog
    List {
        /// Catalog file (JSON)
        #[arg(required = true)]
        catalog: PathBuf,
    },

    /// Find the catalog gestures closest to a gesture string
    Match {
        /// Gesture to look up, e.g. "D L R"
        #[arg(required = true)]
        gesture: String,

        /// Catalog file (JSON)
        #[arg(long, required = true)]
        catalog: PathBuf,

        /// Largest edit distance still accepted as a match
        #[arg(long)]
        max_difference: Option<usize>,
    },
}

pub fn run(args: CatalogArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List { catalog } => {
            let catalog = GestureCatalog::load_from_file(&catalog)?;
            list_gestures(&catalog, format)?;
        }
        CatalogCommands::Match {
            gesture,
            catalog,
            max_difference,
        } => {
            let catalog = GestureCatalog::load_from_file(&catalog)?;
            let query = Gesture::parse(&gesture)?;
            if verbose {
                eprintln!("Matching '{query}' against {} gestures", catalog.len());
            }

            let engine = MatchingEngine::with_config(&catalog, MatchingConfig { max_difference });
            let matches = engine.find_matches(query.directions());

            match format {
                OutputFormat::Text => {
                    if matches.is_empty() {
                        println!("No catalog gesture within tolerance");
                    }
                    for m in &matches {
                        println!(
                            "{}\t{}\t(distance {})",
                            m.gesture,
                            m.name.as_deref().unwrap_or("-"),
                            m.distance
                        );
                    }
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&matches)?);
                }
                OutputFormat::Tsv => {
                    println!("gesture\tname\tdistance");
                    for m in &matches {
                        println!(
                            "{}\t{}\t{}",
                            m.gesture,
                            m.name.as_deref().unwrap_or(""),
                            m.distance
                        );
                    }
                }
            }
        }
    }

    Ok(())
}

fn list_gestures(catalog: &GestureCatalog, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            println!("Gesture catalog ({} gestures)", catalog.len());
            println!("{}", "=".repeat(40));
            for entry in catalog.entries() {
                match &entry.name {
                    Some(name) => println!("  {:<16} {}", name, entry.gesture),
                    None => println!("  {:<16} {}", "-", entry.gesture),
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(catalog.entries())?);
        }
        OutputFormat::Tsv => {
            println!("name\tgesture\tstrokes");
            for entry in catalog.entries() {
                println!(
                    "{}\t{}\t{}",
                    entry.name.as_deref().unwrap_or(""),
                    entry.gesture,
                    entry.gesture.len()
                );
            }
        }
    }
    Ok(())
}
