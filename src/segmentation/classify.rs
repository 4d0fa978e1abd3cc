use crate::core::direction::Direction;
use crate::core::point::Point;

/// `tan(22.5°)`: slope magnitude separating an axis direction from a diagonal
pub const AXIS_SLOPE_LIMIT: f64 = 0.4142;

/// `tan(67.5°)`: slope magnitude separating a diagonal from the vertical axis
pub const DIAGONAL_SLOPE_LIMIT: f64 = 2.4142;

/// Classify the direction of travel from `p1` to `p2`.
///
/// The plane is split into eight 45° sectors centered on the eight
/// directions. A displacement lying exactly on a sector boundary (slope
/// magnitude equal to [`AXIS_SLOPE_LIMIT`] or [`DIAGONAL_SLOPE_LIMIT`]) is
/// classified as the diagonal. Returns `None` when the points coincide.
///
/// ```
/// use gesture_solver::core::direction::Direction;
/// use gesture_solver::core::point::Point;
/// use gesture_solver::segmentation::classify::classify;
///
/// let origin = Point::new(0.0, 0.0);
/// assert_eq!(classify(origin, Point::new(10.0, -10.0)), Some(Direction::UpRight));
/// assert_eq!(classify(origin, Point::new(0.0, 5.0)), Some(Direction::Down));
/// assert_eq!(classify(origin, origin), None);
/// ```
#[must_use]
pub fn classify(p1: Point, p2: Point) -> Option<Direction> {
    let (x1, y1) = (p1.x, p1.y);
    let (x2, y2) = (p2.x, p2.y);

    if x1 == x2 && y1 == y2 {
        return None;
    }
    if x1 == x2 {
        return Some(if y1 > y2 {
            Direction::Up
        } else {
            Direction::Down
        });
    }
    if y1 == y2 {
        return Some(if x1 > x2 {
            Direction::Left
        } else {
            Direction::Right
        });
    }

    let slope = (y2 - y1) / (x2 - x1);

    // Pick the quadrant from the signs of dx and dy, then the sector within it
    let direction = if x2 > x1 && y2 < y1 {
        // up-right quadrant, slope < 0
        if slope > -AXIS_SLOPE_LIMIT {
            Direction::Right
        } else if slope < -DIAGONAL_SLOPE_LIMIT {
            Direction::Up
        } else {
            Direction::UpRight
        }
    } else if x2 > x1 {
        // down-right quadrant, slope > 0
        if slope > DIAGONAL_SLOPE_LIMIT {
            Direction::Down
        } else if slope < AXIS_SLOPE_LIMIT {
            Direction::Right
        } else {
            Direction::DownRight
        }
    } else if y2 < y1 {
        // up-left quadrant, slope > 0
        if slope < AXIS_SLOPE_LIMIT {
            Direction::Left
        } else if slope > DIAGONAL_SLOPE_LIMIT {
            Direction::Up
        } else {
            Direction::UpLeft
        }
    } else {
        // down-left quadrant, slope < 0
        if slope < -DIAGONAL_SLOPE_LIMIT {
            Direction::Down
        } else if slope > -AXIS_SLOPE_LIMIT {
            Direction::Left
        } else {
            Direction::DownLeft
        }
    };

    Some(direction)
}
