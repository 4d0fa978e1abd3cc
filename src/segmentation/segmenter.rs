use tracing::debug;

use crate::core::direction::Direction;
use crate::core::gesture::Gesture;
use crate::core::point::Point;
use crate::core::stroke::Stroke;
use crate::segmentation::classify::classify;
use crate::utils::validation::{validate_points, validate_threshold, ValidationError};

/// Minimum path length (in coordinate units) a window must span before its
/// direction is considered
pub const DEFAULT_MIN_STROKE_LENGTH: f64 = 60.0;

/// Configuration for the segmenter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmenterConfig {
    /// Path length a window must reach to count as a stroke
    pub min_stroke_length: f64,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            min_stroke_length: DEFAULT_MIN_STROKE_LENGTH,
        }
    }
}

/// Splits a point sequence into strokes of consistent direction
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    config: SegmenterConfig,
}

impl Segmenter {
    /// Create a segmenter with the default 60-unit threshold
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a segmenter with a custom configuration
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidThreshold` if the minimum stroke
    /// length is not a positive finite number.
    pub fn with_config(config: SegmenterConfig) -> Result<Self, ValidationError> {
        validate_threshold(config.min_stroke_length)?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Segment `points` into strokes.
    ///
    /// Every start index opens a window that grows until its path length
    /// reaches the minimum stroke length. A window whose point pairs all
    /// classify to the same direction either opens a new stroke or, when it
    /// agrees with the stroke currently open, extends that stroke. Windows
    /// with coincident points or mixed directions are skipped, and a tail
    /// shorter than the threshold never produces a stroke.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NonFiniteCoordinate` if any coordinate is NaN
    /// or infinite.
    pub fn segment(&self, points: &[Point]) -> Result<Vec<Stroke>, ValidationError> {
        validate_points(points)?;
        if points.len() < 2 {
            return Ok(Vec::new());
        }

        let distances: Vec<f64> = points.windows(2).map(|w| w[0].distance_to(&w[1])).collect();

        let mut acc = StrokeAccumulator::default();
        for start in 0..distances.len() {
            let Some(end) = self.window_end(&distances, start) else {
                // Remaining path is too short for any later start as well
                break;
            };
            if let Some(direction) = window_direction(&points[start..=end]) {
                acc.push(direction, start, end);
            }
        }

        Ok(acc.finish())
    }

    /// Directions of the strokes in `points`
    ///
    /// # Errors
    ///
    /// Same as [`Segmenter::segment`].
    pub fn gesture(&self, points: &[Point]) -> Result<Gesture, ValidationError> {
        Ok(Gesture::from_strokes(&self.segment(points)?))
    }

    /// Inclusive `(start, end)` index ranges of the strokes in `points`
    ///
    /// # Errors
    ///
    /// Same as [`Segmenter::segment`].
    pub fn segments(&self, points: &[Point]) -> Result<Vec<(usize, usize)>, ValidationError> {
        Ok(self.segment(points)?.iter().map(Stroke::span).collect())
    }

    /// Index of the first point at which the path from `start` reaches the
    /// minimum stroke length, or `None` if the sequence ends first
    fn window_end(&self, distances: &[f64], start: usize) -> Option<usize> {
        let mut travelled = 0.0;
        for (i, d) in distances.iter().enumerate().skip(start) {
            travelled += d;
            if travelled >= self.config.min_stroke_length {
                return Some(i + 1);
            }
        }
        None
    }
}

/// Common direction of every adjacent pair in `window`, or `None` if any pair
/// is stationary or disagrees
fn window_direction(window: &[Point]) -> Option<Direction> {
    let mut pairs = window.windows(2).map(|w| classify(w[0], w[1]));
    let first = pairs.next()??;
    pairs.all(|d| d == Some(first)).then_some(first)
}

/// Holds the stroke currently open while windows are scanned left to right
#[derive(Debug, Default)]
struct StrokeAccumulator {
    closed: Vec<Stroke>,
    open: Option<Stroke>,
}

impl StrokeAccumulator {
    fn push(&mut self, direction: Direction, start: usize, end: usize) {
        if let Some(current) = self.open.as_mut() {
            if current.direction == direction {
                debug!(%direction, from = current.end, to = end, "extending stroke");
                current.end = end;
                return;
            }
        }

        debug!(%direction, start, end, "opening stroke");
        if let Some(previous) = self.open.replace(Stroke::new(direction, start, end)) {
            self.closed.push(previous);
        }
    }

    fn finish(mut self) -> Vec<Stroke> {
        self.closed.extend(self.open.take());
        self.closed
    }
}

/// Segment `points` with the default configuration
///
/// ```
/// use gesture_solver::core::direction::Direction;
/// use gesture_solver::core::point::points_from;
/// use gesture_solver::segmentation::segment;
///
/// let points = points_from(&[(0, 0), (100, 0), (100, 100)]);
/// let strokes = segment(&points).unwrap();
/// let directions: Vec<_> = strokes.iter().map(|s| s.direction).collect();
/// assert_eq!(directions, vec![Direction::Right, Direction::Down]);
/// ```
///
/// # Errors
///
/// Returns `ValidationError::NonFiniteCoordinate` if any coordinate is NaN or
/// infinite.
pub fn segment(points: &[Point]) -> Result<Vec<Stroke>, ValidationError> {
    Segmenter::new().segment(points)
}
