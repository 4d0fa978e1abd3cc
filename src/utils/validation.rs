//! Centralized validation and helper functions.

use crate::core::point::Point;

/// Maximum number of points accepted from a single input stream (DOS protection)
pub const MAX_POINTS: usize = 1_000_000;

/// Input validation error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Point {index} has a non-finite coordinate: ({x}, {y})")]
    NonFiniteCoordinate { index: usize, x: f64, y: f64 },
    #[error("Minimum stroke length must be a positive finite number, got {0}")]
    InvalidThreshold(f64),
    #[error("Too many points: {0} exceeds maximum of {MAX_POINTS}")]
    TooManyPoints(usize),
}

/// Check that every point has finite coordinates.
///
/// # Examples
///
/// ```
/// use gesture_solver::core::point::Point;
/// use gesture_solver::utils::validation::validate_points;
///
/// assert!(validate_points(&[Point::new(0.0, 0.0), Point::new(5.0, 1.5)]).is_ok());
/// assert!(validate_points(&[Point::new(f64::NAN, 0.0)]).is_err());
/// ```
///
/// # Errors
///
/// Returns `ValidationError::NonFiniteCoordinate` for the first point with a
/// NaN or infinite coordinate.
pub fn validate_points(points: &[Point]) -> Result<(), ValidationError> {
    match points.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(ValidationError::NonFiniteCoordinate {
            index,
            x: points[index].x,
            y: points[index].y,
        }),
        None => Ok(()),
    }
}

/// Check that a minimum stroke length is usable as a segmentation threshold.
///
/// # Errors
///
/// Returns `ValidationError::InvalidThreshold` if the value is zero, negative,
/// NaN, or infinite.
pub fn validate_threshold(min_stroke_length: f64) -> Result<(), ValidationError> {
    if min_stroke_length.is_finite() && min_stroke_length > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidThreshold(min_stroke_length))
    }
}

/// Check if adding another point would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new point.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_point_limit(count: usize) -> Option<String> {
    if count >= MAX_POINTS {
        Some(format!(
            "Too many points: adding another would exceed maximum of {MAX_POINTS}"
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_points_reports_first_bad_index() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, f64::INFINITY),
            Point::new(f64::NAN, 0.0),
        ];
        match validate_points(&points) {
            Err(ValidationError::NonFiniteCoordinate { index, .. }) => assert_eq!(index, 1),
            other => panic!("Expected NonFiniteCoordinate, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_points_empty_is_ok() {
        assert!(validate_points(&[]).is_ok());
    }

    #[test]
    fn test_validate_threshold() {
        assert!(validate_threshold(60.0).is_ok());
        assert!(validate_threshold(0.5).is_ok());
        assert_eq!(
            validate_threshold(0.0),
            Err(ValidationError::InvalidThreshold(0.0))
        );
        assert!(validate_threshold(-1.0).is_err());
        assert!(validate_threshold(f64::NAN).is_err());
        assert!(validate_threshold(f64::INFINITY).is_err());
    }

    #[test]
    fn test_check_point_limit() {
        assert!(check_point_limit(0).is_none());
        assert!(check_point_limit(MAX_POINTS - 1).is_none());
        assert!(check_point_limit(MAX_POINTS).is_some());
    }
}
