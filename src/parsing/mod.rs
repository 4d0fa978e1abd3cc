//! Readers for raw pointer paths.
//!
//! Points are read from:
//!
//! - **Delimited text**: one `x y` pair per line, separated by whitespace, tabs, or commas
//! - **JSON**: an array of `[x, y]` pairs
//!
//! Integer and floating-point coordinates are both accepted. Lines or pairs
//! that do not have exactly two coordinates, and NaN or infinite values, are
//! rejected before any segmentation happens.
//!
//! ## Example
//!
//! ```rust
//! use gesture_solver::parsing::points::parse_points_text;
//!
//! let points = parse_points_text("0 0\n50 0\n100 0\n", None).unwrap();
//! assert_eq!(points.len(), 3);
//! ```

use thiserror::Error;

use crate::utils::validation::{ValidationError, MAX_POINTS};

pub mod points;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Too many points: {0} (maximum {MAX_POINTS})")]
    TooManyPoints(usize),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
