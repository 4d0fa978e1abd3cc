use serde::Serialize;
use tracing::debug;

use crate::catalog::store::{CatalogEntry, GestureCatalog};
use crate::core::direction::Direction;
use crate::core::gesture::Gesture;
use crate::matching::distance::edit_distance;

/// Result of comparing a gesture against one catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// The matched catalog gesture
    pub gesture: Gesture,

    /// Name of the catalog entry, if it has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Edit distance between the query and this gesture
    pub distance: usize,
}

impl MatchResult {
    pub fn new(entry: &CatalogEntry, query: &[Direction]) -> Self {
        Self {
            gesture: entry.gesture.clone(),
            name: entry.name.clone(),
            distance: edit_distance(query, entry.gesture.directions()),
        }
    }

    /// True if the catalog gesture is identical to the query
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.distance == 0
    }
}

/// Configuration for the matching engine
#[derive(Debug, Clone, Default)]
pub struct MatchingConfig {
    /// Largest edit distance still considered a match; `None` accepts any
    pub max_difference: Option<usize>,
}

/// Matches gestures against a catalog by edit distance
pub struct MatchingEngine<'a> {
    catalog: &'a GestureCatalog,
    config: MatchingConfig,
}

impl<'a> MatchingEngine<'a> {
    /// Create a new matching engine with no distance limit
    pub fn new(catalog: &'a GestureCatalog) -> Self {
        Self {
            catalog,
            config: MatchingConfig::default(),
        }
    }

    /// Create a new matching engine with custom configuration
    pub fn with_config(catalog: &'a GestureCatalog, config: MatchingConfig) -> Self {
        Self { catalog, config }
    }

    /// Score every catalog entry within the distance limit, in catalog order
    fn score_all(&self, query: &[Direction]) -> Vec<MatchResult> {
        self.catalog
            .entries()
            .iter()
            .map(|entry| MatchResult::new(entry, query))
            .filter(|m| {
                self.config
                    .max_difference
                    .map_or(true, |max| m.distance <= max)
            })
            .collect()
    }

    /// Find every catalog entry tied at the smallest edit distance
    ///
    /// Returns an empty vector when the catalog is empty or no entry is
    /// within `max_difference`. Winners are listed in catalog order.
    #[must_use]
    pub fn find_matches(&self, query: &[Direction]) -> Vec<MatchResult> {
        let scored = self.score_all(query);
        let Some(best) = scored.iter().map(|m| m.distance).min() else {
            debug!(
                candidates = self.catalog.len(),
                max_difference = ?self.config.max_difference,
                "no catalog gesture within tolerance"
            );
            return Vec::new();
        };

        let winners: Vec<MatchResult> = scored.into_iter().filter(|m| m.distance == best).collect();
        debug!(distance = best, winners = winners.len(), "closest gestures found");
        winners
    }

    /// All catalog entries within the distance limit, closest first
    ///
    /// Ties keep catalog order. At most `limit` results are returned.
    #[must_use]
    pub fn rank(&self, query: &[Direction], limit: usize) -> Vec<MatchResult> {
        let mut results = self.score_all(query);
        results.sort_by_key(|m| m.distance);
        results.truncate(limit);
        results
    }
}

/// Find the catalog gesture(s) closest to `strokes`.
///
/// The catalog is deduplicated first. Every candidate tied at the minimum
/// edit distance is returned; candidates farther than `max_difference` are
/// dropped. An empty catalog, or one with nothing within tolerance, gives an
/// empty result.
///
/// ```
/// use gesture_solver::core::direction::Direction::{Down, Left, Right, Up};
/// use gesture_solver::matching::find_closest_match;
///
/// let catalog = vec![vec![Down, Left], vec![Down, Right]];
/// let matches = find_closest_match(&[Down, Up], &catalog, None);
/// assert_eq!(matches.len(), 2);
///
/// assert!(find_closest_match(&[Down, Up], &catalog, Some(0)).is_empty());
/// ```
#[must_use]
pub fn find_closest_match<G: AsRef<[Direction]>>(
    strokes: &[Direction],
    catalog: &[G],
    max_difference: Option<usize>,
) -> Vec<Gesture> {
    let catalog = GestureCatalog::from_gestures(catalog);
    let engine = MatchingEngine::with_config(&catalog, MatchingConfig { max_difference });
    engine
        .find_matches(strokes)
        .into_iter()
        .map(|m| m.gesture)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    fn gesture(s: &str) -> Gesture {
        Gesture::parse(s).unwrap()
    }

    #[test]
    fn test_single_best_match() {
        let catalog = vec![vec![Down, Left, Down], vec![Down, Right, UpRight]];
        let matches = find_closest_match(&[Down, Left, Right], &catalog, None);
        assert_eq!(matches, vec![gesture("D L D")]);
    }

    #[test]
    fn test_multiple_winners() {
        let catalog = vec![vec![Down, Left], vec![Down, Right]];
        let matches = find_closest_match(&[Down, Up], &catalog, None);
        assert_eq!(matches, vec![gesture("D L"), gesture("D R")]);
    }

    #[test]
    fn test_duplicates_are_collapsed() {
        let catalog = vec![vec![Down, Left], vec![Down, Left], vec![Up, Up, Up]];
        let matches = find_closest_match(&[Down, Left], &catalog, None);
        assert_eq!(matches, vec![gesture("D L")]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog: Vec<Vec<Direction>> = Vec::new();
        assert!(find_closest_match(&[Down], &catalog, None).is_empty());
        assert!(find_closest_match(&[Down], &catalog, Some(5)).is_empty());
    }

    #[test]
    fn test_zero_tolerance_requires_exact_match() {
        let catalog = vec![vec![Down, Left], vec![Down, Right]];
        assert!(find_closest_match(&[Down, Up], &catalog, Some(0)).is_empty());
        assert_eq!(
            find_closest_match(&[Down, Right], &catalog, Some(0)),
            vec![gesture("D R")]
        );
    }

    #[test]
    fn test_tolerance_is_inclusive() {
        let catalog = vec![vec![Right, Down, Left, Up]];
        assert_eq!(find_closest_match(&[Right, Down], &catalog, Some(2)).len(), 1);
        assert!(find_closest_match(&[Right, Down], &catalog, Some(1)).is_empty());
    }

    #[test]
    fn test_empty_query_matches_shortest() {
        let catalog = vec![vec![Up, Up], vec![Left], vec![Right]];
        let matches = find_closest_match(&[], &catalog, None);
        assert_eq!(matches, vec![gesture("L"), gesture("R")]);
    }

    #[test]
    fn test_engine_reports_names_and_distances() {
        let mut catalog = GestureCatalog::new();
        catalog.add_named("back", gesture("L"));
        catalog.add_named("forward", gesture("R"));
        catalog.add_named("refresh", gesture("U D"));

        let engine = MatchingEngine::new(&catalog);
        let matches = engine.find_matches(&[Left]);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name.as_deref(), Some("back"));
        assert!(matches[0].is_exact());
    }

    #[test]
    fn test_rank_orders_by_distance() {
        let mut catalog = GestureCatalog::new();
        catalog.add(gesture("U D L R"));
        catalog.add(gesture("U D"));
        catalog.add(gesture("U"));

        let engine = MatchingEngine::new(&catalog);
        let ranked = engine.rank(&[Up, Down], 10);
        let distances: Vec<usize> = ranked.iter().map(|m| m.distance).collect();
        assert_eq!(distances, vec![0, 1, 2]);

        assert_eq!(engine.rank(&[Up, Down], 1).len(), 1);
    }

    #[test]
    fn test_rank_respects_tolerance() {
        let mut catalog = GestureCatalog::new();
        catalog.add(gesture("U D L R"));
        catalog.add(gesture("U"));

        let engine = MatchingEngine::with_config(
            &catalog,
            MatchingConfig {
                max_difference: Some(1),
            },
        );
        let ranked = engine.rank(&[Up, Down], 10);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].gesture, gesture("U"));
    }
}
