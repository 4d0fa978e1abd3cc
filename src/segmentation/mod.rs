//! Turning raw pointer paths into strokes.
//!
//! - [`classify`](classify::classify): direction of travel between two points
//! - [`Segmenter`]: splits a point sequence into strokes of consistent direction
//!
//! ## Algorithm
//!
//! For every start index the segmenter grows a window until its path length
//! reaches the minimum stroke length (60 units by default). If every point
//! pair in the window moves in the same direction the window either opens a
//! new stroke or, when the direction matches the stroke already open, extends
//! it. Windows containing jitter (mixed directions) or repeated points are
//! ignored, so small wobbles inside a long run do not split it.
//!
//! ## Example
//!
//! ```rust
//! use gesture_solver::core::point::points_from;
//! use gesture_solver::segmentation::Segmenter;
//!
//! let points = points_from(&[(0, 0), (40, 0), (80, 0), (80, 40), (80, 80)]);
//! let gesture = Segmenter::new().gesture(&points).unwrap();
//! assert_eq!(gesture.to_string(), "R D");
//! ```

pub mod classify;
pub mod segmenter;

pub use classify::classify;
pub use segmenter::{segment, Segmenter, SegmenterConfig, DEFAULT_MIN_STROKE_LENGTH};
