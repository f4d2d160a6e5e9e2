//! Dirty-field tracking for settings forms
//!
//! Separates "what the user is editing" from "what is persisted". The
//! tracker holds a baseline (the last known persisted values) and a set
//! of overrides (fields the user has changed). Save buttons are gated on
//! [`FieldTracker::has_changes`] and patch payloads are built from
//! [`FieldTracker::changed_fields`], so only the changed subset is ever
//! submitted.
//!
//! Setting a field back to its baseline value removes the override
//! entirely; an override exists if and only if the field currently
//! differs from the baseline. Comparison uses `PartialEq`, so
//! object-valued fields compare structurally, not by reference.

use std::collections::HashMap;
use std::hash::Hash;

/// Tracks which fields of a record differ from a persisted baseline
///
/// Pure, synchronous, single-writer. Each editing session owns its own
/// tracker; two sessions never share state.
#[derive(Debug, Clone)]
pub struct FieldTracker<K, V> {
    /// Last known persisted values, replaced only by [`FieldTracker::reset`]
    baseline: HashMap<K, V>,
    /// Fields whose current value differs from the baseline
    overrides: HashMap<K, V>,
}

impl<K, V> FieldTracker<K, V>
where
    K: Eq + Hash + Clone,
    V: PartialEq + Clone,
{
    /// Create a tracker with no pending changes over the given baseline
    pub fn new(baseline: HashMap<K, V>) -> Self {
        Self {
            baseline,
            overrides: HashMap::new(),
        }
    }

    /// Current effective value for a field
    ///
    /// Returns the override if one exists, else the baseline value.
    /// Unknown fields return `None`.
    pub fn get(&self, field: &K) -> Option<&V> {
        self.overrides.get(field).or_else(|| self.baseline.get(field))
    }

    /// Baseline value for a field, ignoring any override
    pub fn baseline(&self, field: &K) -> Option<&V> {
        self.baseline.get(field)
    }

    /// Set the effective value for a field
    ///
    /// If `value` equals the baseline value the field becomes clean again
    /// (the override is removed rather than stored as an equal value).
    pub fn set(&mut self, field: K, value: V) {
        if self.baseline.get(&field) == Some(&value) {
            self.overrides.remove(&field);
        } else {
            self.overrides.insert(field, value);
        }
    }

    /// Whether a specific field currently differs from the baseline
    pub fn is_changed(&self, field: &K) -> bool {
        self.overrides.contains_key(field)
    }

    /// Snapshot of all changed fields and their current values
    ///
    /// The returned map is owned; mutating it does not affect the tracker.
    #[must_use]
    pub fn changed_fields(&self) -> HashMap<K, V> {
        self.overrides.clone()
    }

    /// Whether any field differs from the baseline
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.overrides.is_empty()
    }

    /// Replace the baseline and clear all overrides
    ///
    /// Pass `Some` after a successful save (the saved values become the
    /// new baseline) or when the underlying record changes identity.
    /// Pass `None` to discard edits while keeping the current baseline.
    pub fn reset(&mut self, new_baseline: Option<HashMap<K, V>>) {
        if let Some(baseline) = new_baseline {
            self.baseline = baseline;
        }
        self.overrides.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> HashMap<&'static str, Option<String>> {
        HashMap::from([
            ("name", Some("Alpha".to_string())),
            ("defaultChannelId", Some("c1".to_string())),
            ("systemChannelId", None),
        ])
    }

    #[test]
    fn test_get_returns_baseline_when_clean() {
        let tracker = FieldTracker::new(baseline());
        assert_eq!(tracker.get(&"name"), Some(&Some("Alpha".to_string())));
        assert_eq!(tracker.get(&"systemChannelId"), Some(&None));
    }

    #[test]
    fn test_get_unknown_field_is_absent() {
        let tracker = FieldTracker::new(baseline());
        assert_eq!(tracker.get(&"nope"), None);
    }

    #[test]
    fn test_set_then_get_returns_new_value() {
        let mut tracker = FieldTracker::new(baseline());
        tracker.set("name", Some("Beta".to_string()));
        assert_eq!(tracker.get(&"name"), Some(&Some("Beta".to_string())));
    }

    #[test]
    fn test_set_marks_field_changed() {
        // Scenario A: one changed field appears in the changed set
        let mut tracker = FieldTracker::new(baseline());
        tracker.set("name", Some("Beta".to_string()));
        assert!(tracker.has_changes());
        assert!(tracker.is_changed(&"name"));
        let changed = tracker.changed_fields();
        assert_eq!(changed.len(), 1);
        assert_eq!(changed.get(&"name"), Some(&Some("Beta".to_string())));
    }

    #[test]
    fn test_set_back_to_baseline_clears_field() {
        // Scenario B: restoring the baseline value removes the override
        let mut tracker = FieldTracker::new(baseline());
        tracker.set("name", Some("Beta".to_string()));
        tracker.set("name", Some("Alpha".to_string()));
        assert!(!tracker.has_changes());
        assert!(tracker.changed_fields().is_empty());
        assert_eq!(tracker.get(&"name"), Some(&Some("Alpha".to_string())));
    }

    #[test]
    fn test_nullable_field_back_to_baseline_none() {
        // Scenario C: None baseline compares structurally, not by identity
        let mut tracker = FieldTracker::new(baseline());
        tracker.set("systemChannelId", Some("c2".to_string()));
        assert!(tracker.is_changed(&"systemChannelId"));
        tracker.set("systemChannelId", None);
        assert!(tracker.changed_fields().is_empty());
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut tracker = FieldTracker::new(baseline());
        tracker.set("name", Some("Beta".to_string()));
        let once = tracker.changed_fields();
        tracker.set("name", Some("Beta".to_string()));
        assert_eq!(tracker.changed_fields(), once);
    }

    #[test]
    fn test_has_changes_matches_changed_fields() {
        let mut tracker = FieldTracker::new(baseline());
        assert_eq!(tracker.has_changes(), !tracker.changed_fields().is_empty());
        tracker.set("name", Some("Beta".to_string()));
        assert_eq!(tracker.has_changes(), !tracker.changed_fields().is_empty());
        tracker.set("name", Some("Alpha".to_string()));
        assert_eq!(tracker.has_changes(), !tracker.changed_fields().is_empty());
    }

    #[test]
    fn test_reset_with_new_baseline() {
        // Scenario D: reset adopts the saved values and clears overrides
        let mut tracker = FieldTracker::new(baseline());
        tracker.set("name", Some("Beta".to_string()));

        let mut new_baseline = baseline();
        new_baseline.insert("name", Some("Beta".to_string()));
        tracker.reset(Some(new_baseline));

        assert!(!tracker.has_changes());
        assert_eq!(tracker.get(&"name"), Some(&Some("Beta".to_string())));

        tracker.set("name", Some("Gamma".to_string()));
        let changed = tracker.changed_fields();
        assert_eq!(changed.len(), 1);
        assert_eq!(changed.get(&"name"), Some(&Some("Gamma".to_string())));
    }

    #[test]
    fn test_reset_without_baseline_discards_edits() {
        let mut tracker = FieldTracker::new(baseline());
        tracker.set("name", Some("Beta".to_string()));
        tracker.reset(None);
        assert!(!tracker.has_changes());
        assert_eq!(tracker.get(&"name"), Some(&Some("Alpha".to_string())));
    }

    #[test]
    fn test_set_field_absent_from_baseline() {
        // A field the baseline never had is always an override
        let mut tracker = FieldTracker::new(baseline());
        tracker.set("topic", Some("hello".to_string()));
        assert!(tracker.is_changed(&"topic"));
        assert_eq!(tracker.get(&"topic"), Some(&Some("hello".to_string())));
    }

    #[test]
    fn test_changed_fields_is_a_snapshot() {
        let mut tracker = FieldTracker::new(baseline());
        tracker.set("name", Some("Beta".to_string()));
        let mut snapshot = tracker.changed_fields();
        snapshot.clear();
        assert!(tracker.has_changes());
    }

    #[test]
    fn test_baseline_ignores_overrides() {
        let mut tracker = FieldTracker::new(baseline());
        tracker.set("name", Some("Beta".to_string()));
        assert_eq!(tracker.baseline(&"name"), Some(&Some("Alpha".to_string())));
    }
}
