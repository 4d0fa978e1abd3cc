use serde::{Deserialize, Serialize};

use crate::core::direction::{Direction, UnknownDirection};
use crate::core::stroke::Stroke;

/// An ordered sequence of directions, the symbolic fingerprint of a motion
///
/// Two gestures are equal only if they list the same directions in the same
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gesture(pub Vec<Direction>);

impl Gesture {
    #[must_use]
    pub fn new(directions: Vec<Direction>) -> Self {
        Self(directions)
    }

    /// Collect the directions of segmented strokes
    #[must_use]
    pub fn from_strokes(strokes: &[Stroke]) -> Self {
        Self(strokes.iter().map(|s| s.direction).collect())
    }

    /// Parse a gesture from symbols separated by whitespace, commas, or dashes,
    /// e.g. `"D L R"`, `"D,L,R"` or `"UR-DL"`
    ///
    /// # Errors
    ///
    /// Returns `UnknownDirection` for the first symbol that is not a direction.
    pub fn parse(s: &str) -> Result<Self, UnknownDirection> {
        s.split(|c: char| c.is_whitespace() || c == ',' || c == '-')
            .filter(|token| !token.is_empty())
            .map(Direction::parse)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    #[must_use]
    pub fn directions(&self) -> &[Direction] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[Direction]> for Gesture {
    fn as_ref(&self) -> &[Direction] {
        &self.0
    }
}

impl From<Vec<Direction>> for Gesture {
    fn from(directions: Vec<Direction>) -> Self {
        Self(directions)
    }
}

impl From<&[Direction]> for Gesture {
    fn from(directions: &[Direction]) -> Self {
        Self(directions.to_vec())
    }
}

impl FromIterator<Direction> for Gesture {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::str::FromStr for Gesture {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Space-separated symbols, e.g. `D L R`
impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbols: Vec<&str> = self.0.iter().map(|d| d.symbol()).collect();
        write!(f, "{}", symbols.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::{Down, Left, Right, UpRight};

    #[test]
    fn test_parse_separators() {
        let expected = Gesture::new(vec![Down, Left, Right]);
        assert_eq!(Gesture::parse("D L R").unwrap(), expected);
        assert_eq!(Gesture::parse("D,L,R").unwrap(), expected);
        assert_eq!(Gesture::parse(" d, l  r ").unwrap(), expected);
        assert_eq!(Gesture::parse("D-L-R").unwrap(), expected);
    }

    #[test]
    fn test_parse_empty() {
        assert!(Gesture::parse("").unwrap().is_empty());
        assert!(Gesture::parse("  ,, ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_unknown_symbol() {
        let err = Gesture::parse("D Q R").unwrap_err();
        assert_eq!(err.0, "Q");
    }

    #[test]
    fn test_display() {
        let gesture = Gesture::new(vec![UpRight, Down]);
        assert_eq!(gesture.to_string(), "UR D");
        assert_eq!(Gesture::default().to_string(), "");
    }

    #[test]
    fn test_order_matters_for_equality() {
        let a = Gesture::new(vec![Down, Left]);
        let b = Gesture::new(vec![Left, Down]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_strokes() {
        let strokes = vec![
            Stroke::new(Right, 0, 10),
            Stroke::new(Down, 10, 20),
        ];
        assert_eq!(Gesture::from_strokes(&strokes), Gesture::new(vec![Right, Down]));
    }

    #[test]
    fn test_serde_transparent() {
        let gesture = Gesture::new(vec![Down, UpRight]);
        assert_eq!(serde_json::to_string(&gesture).unwrap(), r#"["D","UR"]"#);
    }
}
