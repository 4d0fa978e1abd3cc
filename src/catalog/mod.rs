//! Catalogs of reference gestures.
//!
//! A catalog is the set of gestures a recorded motion is compared against.
//! Catalogs are supplied by the caller, either built in code or loaded from a
//! JSON file, and duplicate gestures collapse into a single entry.
//!
//! ## Catalog Files
//!
//! A catalog file is a JSON array whose entries may be written as a list of
//! symbols, a gesture string, or a named object:
//!
//! ```json
//! [
//!   ["D", "L", "D"],
//!   "D R UR",
//!   {"name": "back", "gesture": "L"}
//! ]
//! ```
//!
//! ## Example
//!
//! ```rust
//! use gesture_solver::{Gesture, GestureCatalog};
//!
//! let catalog = GestureCatalog::from_json(r#"[["D", "L"], "D L", {"name": "up", "gesture": "U"}]"#).unwrap();
//! assert_eq!(catalog.len(), 2);
//! assert!(catalog.contains(&Gesture::parse("U").unwrap()));
//! ```

pub mod store;
