//! Command-line interface for gesture-solver.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **identify**: Segment a recorded pointer path and optionally match it against a catalog
//! - **compare**: Edit distance between two gesture strings
//! - **catalog**: List or search the gestures in a catalog file
//!
//! ## Usage
//!
//! ```text
//! # Recognize the gesture in a point file
//! gesture-solver identify drag.tsv
//!
//! # Match it against a catalog, allowing one difference
//! gesture-solver identify drag.tsv --catalog gestures.json --max-difference 1
//!
//! # Pipe points on stdin
//! cat drag.tsv | gesture-solver identify -
//!
//! # JSON output for scripting
//! gesture-solver identify drag.json --format json
//!
//! # Distance between two gestures
//! gesture-solver compare "D L R" "D L D"
//! ```

use clap::{Parser, Subcommand};

pub mod catalog;
pub mod compare;
pub mod identify;

#[derive(Parser)]
#[command(name = "gesture-solver")]
#[command(version)]
#[command(about = "Recognize 8-direction mouse gestures and match them against a catalog")]
#[command(
    long_about = "gesture-solver turns a recorded pointer path into a sequence of strokes in the 8 cardinal and diagonal directions.\n\nIt can then compare that gesture against a catalog of known gestures and report:\n- The closest gesture, or every gesture tied for closest\n- The edit distance to each candidate\n- Nothing at all when no gesture is within the allowed difference"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Identify the gesture drawn by a sequence of points
    Identify(identify::IdentifyArgs),

    /// Compare two gestures
    Compare(compare::CompareArgs),

    /// Inspect a gesture catalog
    Catalog(catalog::CatalogArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
