use serde::{Deserialize, Serialize};

/// A 2-D pointer position in screen coordinates (`y` grows downward)
///
/// Integer input is widened to `f64` on conversion, so gestures captured as
/// whole pixels and as sub-pixel floats go through the same code path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    #[must_use]
    pub fn distance_to(&self, other: &Point) -> f64 {
        let (dx, dy) = *other - *self;
        dx.hypot(dy)
    }

    /// True if neither coordinate is NaN or infinite
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Displacement `(dx, dy)` from `rhs` to `self`
impl std::ops::Sub for Point {
    type Output = (f64, f64);

    fn sub(self, rhs: Point) -> Self::Output {
        (self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self {
            x: f64::from(x),
            y: f64::from(y),
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self {
            x: f64::from(x),
            y: f64::from(y),
        }
    }
}

impl From<(i64, i64)> for Point {
    // Screen coordinates are far below 2^53, so this is exact in practice
    #[allow(clippy::cast_precision_loss)]
    fn from((x, y): (i64, i64)) -> Self {
        Self {
            x: x as f64,
            y: y as f64,
        }
    }
}

/// Convert a slice of coordinate tuples into points
pub fn points_from<T: Copy + Into<Point>>(coords: &[T]) -> Vec<Point> {
    coords.iter().map(|&c| c.into()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < f64::EPSILON);
        assert!((b.distance_to(&a) - 5.0).abs() < f64::EPSILON);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_sub_gives_displacement() {
        let d = Point::new(10.0, 2.0) - Point::new(4.0, 5.0);
        assert_eq!(d, (6.0, -3.0));
    }

    #[test]
    fn test_integer_and_float_conversions_agree() {
        assert_eq!(Point::from((3, -7)), Point::from((3.0, -7.0)));
        assert_eq!(Point::from((3_i64, -7_i64)), Point::from((3.0_f32, -7.0_f32)));
    }

    #[test]
    fn test_points_from() {
        let points = points_from(&[(0, 0), (10, 0), (10, 10)]);
        assert_eq!(points.len(), 3);
        assert_eq!(points[2], Point::new(10.0, 10.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(Point::new(1.0, 2.0).is_finite());
        assert!(!Point::new(f64::NAN, 2.0).is_finite());
        assert!(!Point::new(1.0, f64::NEG_INFINITY).is_finite());
    }
}
