use std::io::Read;
use std::path::PathBuf;

use clap::Args;

use crate::catalog::store::GestureCatalog;
use crate::cli::OutputFormat;
use crate::core::gesture::Gesture;
use crate::core::point::Point;
use crate::core::stroke::Stroke;
use crate::matching::engine::{MatchResult, MatchingConfig, MatchingEngine};
use crate::parsing::points::{parse_points_file, parse_points_text};
use crate::segmentation::segmenter::{Segmenter, SegmenterConfig, DEFAULT_MIN_STROKE_LENGTH};

#[derive(Args)]
pub struct IdentifyArgs {
    /// Point file (whitespace/tab-separated text, CSV, or JSON array of [x, y] pairs)
    /// Use '-' for stdin (expects whitespace-separated text)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Catalog of known gestures to match against (JSON)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Largest edit distance still accepted as a match
    #[arg(long)]
    pub max_difference: Option<usize>,

    /// Path length a run of points must cover to count as a stroke
    #[arg(long, default_value_t = DEFAULT_MIN_STROKE_LENGTH)]
    pub min_stroke_length: f64,

    /// Also list up to this many runner-up catalog gestures
    #[arg(short = 'n', long, default_value = "0")]
    pub ranked: usize,
}

/// Everything `identify` reports for one input
struct Identification {
    strokes: Vec<Stroke>,
    gesture: Gesture,
    /// `None` when no catalog was given
    matches: Option<Vec<MatchResult>>,
    ranked: Vec<MatchResult>,
}

/// Execute the identify command
///
/// # Errors
///
/// Returns an error if the points or catalog cannot be read, or if the
/// stroke length is not a positive number.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: IdentifyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let points = read_points(&args)?;
    if verbose {
        eprintln!("Read {} points from {}", points.len(), args.input.display());
    }

    let segmenter = Segmenter::with_config(SegmenterConfig {
        min_stroke_length: args.min_stroke_length,
    })?;
    let strokes = segmenter.segment(&points)?;
    let gesture = Gesture::from_strokes(&strokes);

    let mut result = Identification {
        strokes,
        gesture,
        matches: None,
        ranked: Vec::new(),
    };

    if let Some(path) = &args.catalog {
        let catalog = GestureCatalog::load_from_file(path)?;
        if verbose {
            eprintln!("Loaded {} distinct gestures from {}", catalog.len(), path.display());
        }

        let engine = MatchingEngine::with_config(
            &catalog,
            MatchingConfig {
                max_difference: args.max_difference,
            },
        );
        let query = result.gesture.directions();
        result.matches = Some(engine.find_matches(query));
        if args.ranked > 0 {
            result.ranked = engine.rank(query, args.ranked);
        }
    }

    match format {
        OutputFormat::Text => print_text_results(&result),
        OutputFormat::Json => print_json_results(&result)?,
        OutputFormat::Tsv => print_tsv_results(&result),
    }

    Ok(())
}

fn read_points(args: &IdentifyArgs) -> anyhow::Result<Vec<Point>> {
    if args.input.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(parse_points_text(&text, None)?)
    } else {
        Ok(parse_points_file(&args.input)?)
    }
}

fn describe(m: &MatchResult) -> String {
    match &m.name {
        Some(name) => format!("{name} ({})", m.gesture),
        None => m.gesture.to_string(),
    }
}

fn print_text_results(result: &Identification) {
    if result.strokes.is_empty() {
        println!("No strokes recognized");
    } else {
        println!("Gesture: {}", result.gesture);
        println!("\nStrokes:");
        for (i, stroke) in result.strokes.iter().enumerate() {
            println!(
                "  {:>2}. {:<2}  points {}..={}",
                i + 1,
                stroke.direction.symbol(),
                stroke.start,
                stroke.end
            );
        }
    }

    let Some(matches) = &result.matches else {
        return;
    };

    println!();
    match matches.first() {
        None => println!("No catalog gesture within tolerance"),
        Some(best) => {
            let label = if matches.len() == 1 { "match" } else { "matches" };
            println!("Closest {label} (distance {}):", best.distance);
            for m in matches {
                println!("  {}", describe(m));
            }
        }
    }

    if !result.ranked.is_empty() {
        println!("\nRanked candidates:");
        for (i, m) in result.ranked.iter().enumerate() {
            println!("  {:>2}. [{}] {}", i + 1, m.distance, describe(m));
        }
    }
}

fn print_json_results(result: &Identification) -> anyhow::Result<()> {
    let mut output = serde_json::json!({
        "gesture": result.gesture.to_string(),
        "strokes": result.strokes,
    });

    if let Some(matches) = &result.matches {
        output["matches"] = serde_json::json!(matches);
        if !result.ranked.is_empty() {
            output["ranked"] = serde_json::json!(result.ranked);
        }
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(result: &Identification) {
    println!("direction\tstart\tend");
    for stroke in &result.strokes {
        println!("{}\t{}\t{}", stroke.direction, stroke.start, stroke.end);
    }

    if let Some(matches) = &result.matches {
        println!();
        println!("gesture\tname\tdistance");
        for m in matches {
            println!(
                "{}\t{}\t{}",
                m.gesture,
                m.name.as_deref().unwrap_or(""),
                m.distance
            );
        }
    }
}
