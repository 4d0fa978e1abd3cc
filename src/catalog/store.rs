use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::core::direction::{Direction, UnknownDirection};
use crate::core::gesture::Gesture;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid gesture in catalog entry {index}: {source}")]
    InvalidGesture {
        index: usize,
        source: UnknownDirection,
    },
}

/// A catalog entry: a gesture and an optional label for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub gesture: Gesture,
}

/// How an entry may be written in a catalog file
///
/// Either a bare list of symbols (`["D", "L"]`), a gesture string
/// (`"D L"`), or an object with a name (`{"name": "back", "gesture": "L"}`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Symbols(Vec<String>),
    Text(String),
    Named { name: Option<String>, gesture: RawGesture },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawGesture {
    Symbols(Vec<String>),
    Text(String),
}

impl RawGesture {
    fn parse(&self) -> Result<Gesture, UnknownDirection> {
        match self {
            Self::Symbols(symbols) => symbols.iter().map(|s| Direction::parse(s)).collect(),
            Self::Text(text) => Gesture::parse(text),
        }
    }
}

/// A set of reference gestures, deduplicated by sequence
///
/// Entries keep insertion order. Adding a gesture that is already present is
/// a no-op; the first entry's name is kept.
#[derive(Debug, Clone, Default)]
pub struct GestureCatalog {
    entries: Vec<CatalogEntry>,

    /// Index: gesture -> position in entries
    gesture_to_index: HashMap<Gesture, usize>,
}

impl GestureCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from unnamed gestures, dropping duplicates
    pub fn from_gestures<G: AsRef<[Direction]>>(gestures: &[G]) -> Self {
        let mut catalog = Self::new();
        for gesture in gestures {
            catalog.add(Gesture::from(gesture.as_ref()));
        }
        catalog
    }

    /// Load a catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ReadError` if the file cannot be read, or the
    /// errors of [`GestureCatalog::from_json`].
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a catalog from a JSON array of entries
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` for malformed JSON, or
    /// `CatalogError::InvalidGesture` if an entry contains an unknown
    /// direction symbol.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: Vec<RawEntry> = serde_json::from_str(json)?;

        let mut catalog = Self::new();
        for (index, entry) in raw.into_iter().enumerate() {
            let (name, gesture) = match entry {
                RawEntry::Symbols(symbols) => (None, RawGesture::Symbols(symbols).parse()),
                RawEntry::Text(text) => (None, Gesture::parse(&text)),
                RawEntry::Named { name, gesture } => (name, gesture.parse()),
            };
            let gesture = gesture.map_err(|source| CatalogError::InvalidGesture { index, source })?;
            catalog.add_entry(CatalogEntry { name, gesture });
        }

        Ok(catalog)
    }

    /// Add an unnamed gesture. Returns false if it was already present.
    pub fn add(&mut self, gesture: Gesture) -> bool {
        self.add_entry(CatalogEntry {
            name: None,
            gesture,
        })
    }

    /// Add a named gesture. Returns false if the gesture was already present.
    pub fn add_named(&mut self, name: impl Into<String>, gesture: Gesture) -> bool {
        self.add_entry(CatalogEntry {
            name: Some(name.into()),
            gesture,
        })
    }

    /// Add an entry unless its gesture is already in the catalog
    pub fn add_entry(&mut self, entry: CatalogEntry) -> bool {
        if let Some(&existing) = self.gesture_to_index.get(&entry.gesture) {
            debug!(
                gesture = %entry.gesture,
                existing,
                "skipping duplicate catalog gesture"
            );
            return false;
        }

        self.gesture_to_index
            .insert(entry.gesture.clone(), self.entries.len());
        self.entries.push(entry);
        true
    }

    /// Look up the entry for a gesture
    #[must_use]
    pub fn get(&self, gesture: &Gesture) -> Option<&CatalogEntry> {
        self.gesture_to_index
            .get(gesture)
            .map(|&idx| &self.entries[idx])
    }

    /// Find the first entry with the given name
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries
            .iter()
            .find(|e| e.name.as_deref() == Some(name))
    }

    #[must_use]
    pub fn contains(&self, gesture: &Gesture) -> bool {
        self.gesture_to_index.contains_key(gesture)
    }

    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Number of distinct gestures in catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::direction::Direction::*;

    #[test]
    fn test_duplicates_collapse() {
        let mut catalog = GestureCatalog::new();
        assert!(catalog.add_named("back", Gesture::new(vec![Left])));
        assert!(catalog.add(Gesture::new(vec![Down, Right])));
        assert!(!catalog.add_named("again", Gesture::new(vec![Left])));

        assert_eq!(catalog.len(), 2);
        let entry = catalog.get(&Gesture::new(vec![Left])).unwrap();
        assert_eq!(entry.name.as_deref(), Some("back"));
    }

    #[test]
    fn test_from_gestures_keeps_first_seen_order() {
        let catalog = GestureCatalog::from_gestures(&[
            vec![Down, Left],
            vec![Up],
            vec![Down, Left],
            vec![Left, Down],
        ]);
        let gestures: Vec<String> = catalog
            .entries()
            .iter()
            .map(|e| e.gesture.to_string())
            .collect();
        assert_eq!(gestures, vec!["D L", "U", "L D"]);
    }

    #[test]
    fn test_from_json_mixed_forms() {
        let json = r#"[
            ["D", "L", "D"],
            "D R UR",
            {"name": "circle", "gesture": ["R", "D", "L", "U"]},
            {"name": "zigzag", "gesture": "UR DR UR"},
            ["D", "L", "D"]
        ]"#;
        let catalog = GestureCatalog::from_json(json).unwrap();

        assert_eq!(catalog.len(), 4);
        assert!(catalog.contains(&Gesture::new(vec![Down, Right, UpRight])));
        let circle = catalog.find_by_name("circle").unwrap();
        assert_eq!(circle.gesture, Gesture::new(vec![Right, Down, Left, Up]));
        assert!(catalog.find_by_name("missing").is_none());
    }

    #[test]
    fn test_from_json_unknown_symbol() {
        let result = GestureCatalog::from_json(r#"[["D"], ["D", "X"]]"#);
        match result {
            Err(CatalogError::InvalidGesture { index, source }) => {
                assert_eq!(index, 1);
                assert_eq!(source.0, "X");
            }
            other => panic!("Expected InvalidGesture, got {other:?}"),
        }
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            GestureCatalog::from_json("{not json"),
            Err(CatalogError::ParseError(_))
        ));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = GestureCatalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
    }
}
