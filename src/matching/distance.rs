/// Levenshtein distance between two sequences.
///
/// Counts the minimum number of single-element insertions, deletions, and
/// substitutions needed to turn `a` into `b`. Elements are compared with
/// `PartialEq`, so gestures are compared by direction directly.
///
/// # Examples
///
/// ```
/// use gesture_solver::core::direction::Direction::{Down, Left, Right};
/// use gesture_solver::matching::distance::edit_distance;
///
/// assert_eq!(edit_distance(&[Down, Left, Right], &[Down, Left, Down]), 1);
/// assert_eq!(edit_distance("kitten".as_bytes(), "sitting".as_bytes()), 3);
/// ```
#[must_use]
pub fn edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    // Keep the shorter sequence along the row to bound memory
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    let mut previous: Vec<usize> = (0..=short.len()).collect();
    let mut current = vec![0; short.len() + 1];

    for (i, x) in long.iter().enumerate() {
        current[0] = i + 1;
        for (j, y) in short.iter().enumerate() {
            let substitution = previous[j] + usize::from(x != y);
            let deletion = previous[j + 1] + 1;
            let insertion = current[j] + 1;
            current[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[short.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::direction::Direction::{self, *};

    #[test]
    fn test_known_values() {
        assert_eq!(edit_distance(&[Down, Left, Right], &[Down, Left, Down]), 1);
        assert_eq!(edit_distance(&[Down, Left, Right], &[Down, Right, UpRight]), 2);
        assert_eq!(edit_distance(b"kitten", b"sitting"), 3);
        assert_eq!(edit_distance(b"flaw", b"lawn"), 2);
    }

    #[test]
    fn test_empty_sequences() {
        let empty: [Direction; 0] = [];
        assert_eq!(edit_distance(&empty, &empty), 0);
        assert_eq!(edit_distance(&empty, &[Up, Down]), 2);
        assert_eq!(edit_distance(&[Up, Down, Left], &empty), 3);
    }

    #[test]
    fn test_insertions_and_deletions() {
        assert_eq!(edit_distance(&[Up], &[Up, Right, Down]), 2);
        assert_eq!(edit_distance(&[Left, Up, Right], &[Up]), 2);
        assert_eq!(edit_distance(&[Up, Down], &[Down, Up]), 2);
    }

    #[test]
    fn test_metric_laws() {
        let samples: Vec<Vec<Direction>> = vec![
            vec![],
            vec![Up],
            vec![Down, Left, Right],
            vec![Down, Left, Down],
            vec![Right, Down, Left, Up],
            vec![UpLeft, UpRight, DownLeft, DownRight, Up],
            vec![Left, Left, Left],
        ];
        for a in &samples {
            assert_eq!(edit_distance(a, a), 0);
            for b in &samples {
                let ab = edit_distance(a, b);
                assert_eq!(ab, edit_distance(b, a));
                assert!(ab <= a.len().max(b.len()));
                if a != b {
                    assert!(ab > 0);
                }
                for c in &samples {
                    assert!(edit_distance(a, c) <= ab + edit_distance(b, c));
                }
            }
        }
    }
}
