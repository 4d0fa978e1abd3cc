//! # gesture-solver
//!
//! A library for recognizing mouse and touch gestures drawn as straight-line
//! strokes in the 8 cardinal and diagonal directions.
//!
//! A drag produces a noisy sequence of pointer positions. `gesture-solver`
//! reduces it to a symbolic gesture such as `R D L` and finds the closest
//! gestures in a catalog of known patterns.
//!
//! ## Features
//!
//! - **Stroke segmentation**: Splits a point sequence into consistent directional runs
//! - **Jitter filtering**: Ignores movement shorter than a minimum stroke length
//! - **Exact sector classification**: 45° sectors with boundaries at odd multiples of 22.5°
//! - **Edit-distance matching**: Levenshtein distance with all tied winners reported
//! - **Tolerance**: Optional cap on how different a match may be
//!
//! ## Example
//!
//! ```rust
//! use gesture_solver::core::point::points_from;
//! use gesture_solver::{find_closest_match, Direction, Segmenter};
//!
//! let points = points_from(&[(0, 0), (50, 0), (100, 0), (100, 50), (100, 100)]);
//! let gesture = Segmenter::new().gesture(&points).unwrap();
//! assert_eq!(gesture.directions(), &[Direction::Right, Direction::Down]);
//!
//! let catalog = vec![
//!     vec![Direction::Right, Direction::Down],
//!     vec![Direction::Down, Direction::Right],
//! ];
//! let matches = find_closest_match(gesture.directions(), &catalog, Some(1));
//! assert_eq!(matches, vec![gesture]);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Core data types for points, directions, strokes, and gestures
//! - [`segmentation`]: Direction classification and stroke segmentation
//! - [`matching`]: Edit distance and catalog matching
//! - [`catalog`]: Deduplicating gesture catalogs
//! - [`parsing`]: Readers for point files
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod segmentation;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::store::{CatalogEntry, GestureCatalog};
pub use core::direction::Direction;
pub use core::gesture::Gesture;
pub use core::point::Point;
pub use core::stroke::Stroke;
pub use matching::distance::edit_distance;
pub use matching::engine::{find_closest_match, MatchResult, MatchingConfig, MatchingEngine};
pub use segmentation::classify::classify;
pub use segmentation::segmenter::{segment, Segmenter, SegmenterConfig};
