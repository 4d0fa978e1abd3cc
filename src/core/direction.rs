use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the 8 cardinal and diagonal directions a stroke can travel.
///
/// Screen coordinates are assumed: `y` grows downward, so a decreasing `y`
/// is [`Direction::Up`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "U")]
    Up,
    #[serde(rename = "UR")]
    UpRight,
    #[serde(rename = "R")]
    Right,
    #[serde(rename = "DR")]
    DownRight,
    #[serde(rename = "D")]
    Down,
    #[serde(rename = "DL")]
    DownLeft,
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "UL")]
    UpLeft,
}

/// Error returned when a direction symbol is not one of `U UR R DR D DL L UL`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown direction symbol: '{0}'")]
pub struct UnknownDirection(pub String);

impl Direction {
    /// All directions, clockwise starting from [`Direction::Up`]
    pub const ALL: [Direction; 8] = [
        Self::Up,
        Self::UpRight,
        Self::Right,
        Self::DownRight,
        Self::Down,
        Self::DownLeft,
        Self::Left,
        Self::UpLeft,
    ];

    /// Short symbol used in gesture strings (`"U"`, `"DR"`, ...)
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Up => "U",
            Self::UpRight => "UR",
            Self::Right => "R",
            Self::DownRight => "DR",
            Self::Down => "D",
            Self::DownLeft => "DL",
            Self::Left => "L",
            Self::UpLeft => "UL",
        }
    }

    /// Parse a direction from its short symbol (case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns `UnknownDirection` if the symbol is not recognized.
    pub fn parse(s: &str) -> Result<Self, UnknownDirection> {
        match s.trim().to_uppercase().as_str() {
            "U" => Ok(Self::Up),
            "UR" => Ok(Self::UpRight),
            "R" => Ok(Self::Right),
            "DR" => Ok(Self::DownRight),
            "D" => Ok(Self::Down),
            "DL" => Ok(Self::DownLeft),
            "L" => Ok(Self::Left),
            "UL" => Ok(Self::UpLeft),
            _ => Err(UnknownDirection(s.to_string())),
        }
    }

    /// The direction pointing the other way (U<->D, L<->R, UL<->DR, UR<->DL)
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::UpRight => Self::DownLeft,
            Self::Right => Self::Left,
            Self::DownRight => Self::UpLeft,
            Self::Down => Self::Up,
            Self::DownLeft => Self::UpRight,
            Self::Left => Self::Right,
            Self::UpLeft => Self::DownRight,
        }
    }

    #[must_use]
    pub fn is_diagonal(self) -> bool {
        matches!(
            self,
            Self::UpRight | Self::DownRight | Self::DownLeft | Self::UpLeft
        )
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::str::FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_roundtrip_covers_all() {
        for dir in Direction::ALL {
            assert_eq!(Direction::parse(dir.symbol()).unwrap(), dir);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Direction::parse("ul").unwrap(), Direction::UpLeft);
        assert_eq!(" dr ".parse::<Direction>().unwrap(), Direction::DownRight);
    }

    #[test]
    fn test_parse_unknown() {
        let err = Direction::parse("X").unwrap_err();
        assert_eq!(err, UnknownDirection("X".to_string()));
        assert!(Direction::parse("").is_err());
        assert!(Direction::parse("UU").is_err());
    }

    #[test]
    fn test_opposite_is_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.opposite().is_diagonal(), dir.is_diagonal());
        }
    }

    #[test]
    fn test_diagonals() {
        let diagonals: Vec<_> = Direction::ALL
            .iter()
            .filter(|d| d.is_diagonal())
            .collect();
        assert_eq!(diagonals.len(), 4);
        assert!(!Direction::Left.is_diagonal());
    }

    #[test]
    fn test_serde_uses_symbols() {
        let json = serde_json::to_string(&vec![Direction::Up, Direction::DownLeft]).unwrap();
        assert_eq!(json, r#"["U","DL"]"#);

        let parsed: Vec<Direction> = serde_json::from_str(r#"["R","UR"]"#).unwrap();
        assert_eq!(parsed, vec![Direction::Right, Direction::UpRight]);
    }
}
