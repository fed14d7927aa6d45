// ==========================================
// Sistema de Asignación de Bodega - match ordering policy
// ==========================================
// Produces a total order over candidate slots for a given product.
// Sort keys, in priority:
//   1) fit tightness (usable - required), ascending
//   2) configurable locality keys, ascending
//   3) stable catalog insertion order
// One comparator parameterized by its locality-key list replaces the
// three near-duplicate orderings of the source sheets.
// ==========================================

use crate::domain::slot::Slot;
use crate::engine::catalog::SlotCatalog;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

// ==========================================
// LocalityKey - physical tie-break dimensions
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocalityKey {
    Rack,
    Level,
    Row,
    Position,
}

impl fmt::Display for LocalityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocalityKey::Rack => write!(f, "RACK"),
            LocalityKey::Level => write!(f, "LEVEL"),
            LocalityKey::Row => write!(f, "ROW"),
            LocalityKey::Position => write!(f, "POSITION"),
        }
    }
}

// ==========================================
// MatchOrderingPolicy
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchOrderingPolicy {
    locality_keys: Vec<LocalityKey>,
}

impl MatchOrderingPolicy {
    pub fn new(locality_keys: Vec<LocalityKey>) -> Self {
        Self { locality_keys }
    }

    /// Multi-rack variant: rack -> level -> row -> position.
    pub fn racked() -> Self {
        Self::new(vec![
            LocalityKey::Rack,
            LocalityKey::Level,
            LocalityKey::Row,
            LocalityKey::Position,
        ])
    }

    /// Single-rack variant: level -> row -> position.
    pub fn by_level() -> Self {
        Self::new(vec![
            LocalityKey::Level,
            LocalityKey::Row,
            LocalityKey::Position,
        ])
    }

    /// No secondary ordering: ties keep catalog insertion order.
    pub fn insertion_order() -> Self {
        Self::new(Vec::new())
    }

    pub fn locality_keys(&self) -> &[LocalityKey] {
        &self.locality_keys
    }

    /// Rank candidate catalog indices for a product. The sort is stable,
    /// so slots equal under every key stay in catalog order and a rerun
    /// on identical inputs reproduces the ranking exactly.
    pub fn rank(
        &self,
        required_height: f64,
        catalog: &SlotCatalog,
        mut candidates: Vec<usize>,
    ) -> Vec<usize> {
        candidates
            .sort_by(|&a, &b| self.compare(required_height, catalog.slot(a), catalog.slot(b)));
        candidates
    }

    /// Compare two candidate slots for a product.
    ///
    /// `Ordering::Less` means `a` is the better match.
    pub fn compare(&self, required_height: f64, a: &Slot, b: &Slot) -> Ordering {
        // 1. Fit tightness: smallest slack first. Heights are validated
        // finite, so total_cmp matches the numeric order.
        match a
            .slack(required_height)
            .total_cmp(&b.slack(required_height))
        {
            Ordering::Equal => {}
            other => return other,
        }

        // 2. Locality keys, in configured sequence.
        for key in &self.locality_keys {
            let ord = match key {
                LocalityKey::Rack => a.address.rack.cmp(&b.address.rack),
                LocalityKey::Level => a.address.level.cmp(&b.address.level),
                LocalityKey::Row => a.address.row.cmp(&b.address.row),
                LocalityKey::Position => a.address.position.cmp(&b.address.position),
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }

        // 3. Leave remaining ties to the stable sort (catalog order).
        Ordering::Equal
    }
}

impl Default for MatchOrderingPolicy {
    fn default() -> Self {
        Self::by_level()
    }
}

// ==========================================
// Tests
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::slot::SlotAddress;

    fn slot(rack: Option<&str>, level: u32, row: u32, position: u32, height: f64) -> Slot {
        Slot::new(
            SlotAddress::new(rack.map(String::from), level, row, position),
            height,
        )
    }

    #[test]
    fn test_tightest_fit_wins() {
        let catalog = SlotCatalog::new(vec![
            slot(None, 1, 1, 1, 12.0),
            slot(None, 2, 1, 1, 8.0),
        ]);
        let policy = MatchOrderingPolicy::by_level();

        let ranked = policy.rank(7.0, &catalog, vec![0, 1]);
        // Slack 1.0 beats slack 5.0 regardless of level.
        assert_eq!(ranked, vec![1, 0]);
    }

    #[test]
    fn test_locality_breaks_slack_ties() {
        let catalog = SlotCatalog::new(vec![
            slot(None, 3, 1, 1, 10.0),
            slot(None, 1, 2, 1, 10.0),
            slot(None, 1, 1, 4, 10.0),
            slot(None, 1, 1, 2, 10.0),
        ]);
        let policy = MatchOrderingPolicy::by_level();

        let ranked = policy.rank(10.0, &catalog, vec![0, 1, 2, 3]);
        // Equal slack everywhere: level, then row, then position.
        assert_eq!(ranked, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_rack_key_ordering() {
        let catalog = SlotCatalog::new(vec![
            slot(Some("R02"), 1, 1, 1, 10.0),
            slot(Some("R01"), 9, 9, 9, 10.0),
        ]);
        let policy = MatchOrderingPolicy::racked();

        let ranked = policy.rank(10.0, &catalog, vec![0, 1]);
        assert_eq!(ranked, vec![1, 0], "rack outranks level/row/position");
    }

    #[test]
    fn test_insertion_order_preserves_catalog_ties() {
        let catalog = SlotCatalog::new(vec![
            slot(None, 5, 5, 5, 10.0),
            slot(None, 1, 1, 1, 10.0),
            slot(None, 3, 3, 3, 10.0),
        ]);
        let policy = MatchOrderingPolicy::insertion_order();

        let ranked = policy.rank(10.0, &catalog, vec![0, 1, 2]);
        assert_eq!(ranked, vec![0, 1, 2], "equal slack keeps load order");
    }

    #[test]
    fn test_insertion_order_still_sorts_by_slack() {
        let catalog = SlotCatalog::new(vec![
            slot(None, 1, 1, 1, 14.0),
            slot(None, 1, 1, 2, 11.0),
        ]);
        let policy = MatchOrderingPolicy::insertion_order();

        let ranked = policy.rank(10.0, &catalog, vec![0, 1]);
        assert_eq!(ranked, vec![1, 0]);
    }

    #[test]
    fn test_missing_rack_sorts_first() {
        let catalog = SlotCatalog::new(vec![
            slot(Some("R01"), 1, 1, 1, 10.0),
            slot(None, 1, 1, 2, 10.0),
        ]);
        let policy = MatchOrderingPolicy::racked();

        let ranked = policy.rank(10.0, &catalog, vec![0, 1]);
        assert_eq!(ranked, vec![1, 0]);
    }
}
