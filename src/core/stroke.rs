use serde::{Deserialize, Serialize};

use crate::core::direction::Direction;

/// A run of consecutive points travelling consistently in one direction
///
/// `start` and `end` are inclusive indexes into the point slice the stroke
/// was segmented from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stroke {
    pub direction: Direction,
    pub start: usize,
    pub end: usize,
}

impl Stroke {
    #[must_use]
    pub fn new(direction: Direction, start: usize, end: usize) -> Self {
        Self {
            direction,
            start,
            end,
        }
    }

    /// Number of points covered by this stroke
    #[must_use]
    pub fn len_points(&self) -> usize {
        self.end - self.start + 1
    }

    /// Index range as a `(start, end)` tuple
    #[must_use]
    pub fn span(&self) -> (usize, usize) {
        (self.start, self.end)
    }
}

impl std::fmt::Display for Stroke {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}..={}]", self.direction, self.start, self.end)
    }
}
