use clap::Args;

use crate::cli::OutputFormat;
use crate::core::gesture::Gesture;
use crate::matching::distance::edit_distance;

#[derive(Args)]
pub struct CompareArgs {
    /// First gesture, e.g. "D L R"
    #[arg(required = true)]
    pub gesture_a: String,

    /// Second gesture, e.g. "D L D"
    #[arg(required = true)]
    pub gesture_b: String,
}

pub fn run(args: CompareArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let gesture_a = Gesture::parse(&args.gesture_a)?;
    let gesture_b = Gesture::parse(&args.gesture_b)?;

    if verbose {
        eprintln!(
            "Gesture A: {} strokes, gesture B: {} strokes",
            gesture_a.len(),
            gesture_b.len()
        );
    }

    let distance = edit_distance(gesture_a.directions(), gesture_b.directions());

    match format {
        OutputFormat::Text => {
            println!("Gesture A: {gesture_a}");
            println!("Gesture B: {gesture_b}");
            println!("Edit distance: {distance}");
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "gesture_a": gesture_a,
                "gesture_b": gesture_b,
                "distance": distance,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("gesture_a\tgesture_b\tdistance");
            println!("{gesture_a}\t{gesture_b}\t{distance}");
        }
    }

    Ok(())
}
