//! Gesture matching by edit distance.
//!
//! This module provides the matching functionality:
//!
//! - [`edit_distance`]: Levenshtein distance over any `PartialEq` sequence
//! - [`MatchingEngine`]: Matches a gesture against a [`GestureCatalog`](crate::GestureCatalog)
//! - [`find_closest_match`]: One-shot matching against a plain list of gestures
//!
//! ## Matching
//!
//! Every catalog gesture is scored by its edit distance to the query. Entries
//! farther than the optional `max_difference` are dropped, and all entries
//! tied at the smallest remaining distance are returned. Several winners are
//! a normal outcome; an empty result means nothing was close enough.
//!
//! ## Example
//!
//! ```rust
//! use gesture_solver::{Gesture, GestureCatalog, MatchingConfig, MatchingEngine};
//!
//! let mut catalog = GestureCatalog::new();
//! catalog.add_named("back", Gesture::parse("L").unwrap());
//! catalog.add_named("close", Gesture::parse("D R").unwrap());
//!
//! let engine = MatchingEngine::with_config(&catalog, MatchingConfig { max_difference: Some(1) });
//! let query = Gesture::parse("D R R").unwrap();
//! let matches = engine.find_matches(query.directions());
//!
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].name.as_deref(), Some("close"));
//! ```

pub mod distance;
pub mod engine;

pub use distance::edit_distance;
pub use engine::{find_closest_match, MatchResult, MatchingConfig, MatchingEngine};
