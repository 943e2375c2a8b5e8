//! Selection state and the pure derivations the dashboard renders from.

use super::catalog::{LimitTable, LocationReading, TestDefinition, TestKey, TEST_CATALOG};

/// Resolve a test id against the catalog, falling back to the first entry.
pub fn resolve_active_test(selected_test_id: &str) -> &'static TestDefinition {
    TEST_CATALOG
        .iter()
        .find(|t| t.id == selected_test_id)
        .unwrap_or(&TEST_CATALOG[0])
}

/// Whether the limit tables carry thresholds for this test.
pub fn should_show_limits(active_test: &TestDefinition) -> bool {
    matches!(
        active_test.key,
        TestKey::Hardness | TestKey::Alkalinity | TestKey::Turbidity
    )
}

pub fn lookup_limit(table: &LimitTable, key: TestKey) -> Option<f64> {
    table.get(key)
}

/// Pair each location's name with its value for `key`, in input order.
pub fn project_readings(
    locations: &[LocationReading],
    key: TestKey,
) -> impl Iterator<Item = (&'static str, f64)> + '_ {
    locations.iter().map(move |loc| (loc.name, loc.value(key)))
}

/// Session-scoped UI state. Reset on every launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiSelectionState {
    pub selected_test_id: String,
    pub dark_mode: bool,
}

impl Default for UiSelectionState {
    fn default() -> Self {
        Self {
            selected_test_id: TEST_CATALOG[0].id.to_string(),
            dark_mode: true,
        }
    }
}

impl UiSelectionState {
    pub fn new(selected_test_id: impl Into<String>, dark_mode: bool) -> Self {
        Self {
            selected_test_id: selected_test_id.into(),
            dark_mode,
        }
    }

    pub fn select_test(&mut self, id: &str) {
        self.selected_test_id = id.to_string();
    }

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn active_test(&self) -> &'static TestDefinition {
        resolve_active_test(&self.selected_test_id)
    }

    /// Catalog index of the active test (0 when the id is unknown).
    pub fn active_index(&self) -> usize {
        TEST_CATALOG
            .iter()
            .position(|t| t.id == self.selected_test_id)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{ACCEPTABLE_LIMITS, LOCATIONS, PERMISSIBLE_LIMITS};
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("test-1", "Hardness")]
    #[case("test-2", "pH Level")]
    #[case("test-3", "Turbidity")]
    #[case("test-4", "Alkalinity")]
    #[case("test-5", "Acidity")]
    fn test_resolve_known_ids(#[case] id: &str, #[case] name: &str) {
        let test = resolve_active_test(id);
        assert_eq!(test.id, id);
        assert_eq!(test.name, name);
    }

    #[rstest]
    #[case("")]
    #[case("test-0")]
    #[case("test-6")]
    #[case("Hardness")]
    #[case("TEST-2")]
    fn test_resolve_unknown_falls_back(#[case] id: &str) {
        assert_eq!(resolve_active_test(id), &TEST_CATALOG[0]);
    }

    #[rstest]
    #[case(TestKey::Hardness, true)]
    #[case(TestKey::Ph, false)]
    #[case(TestKey::Turbidity, true)]
    #[case(TestKey::Alkalinity, true)]
    #[case(TestKey::Acidity, false)]
    fn test_should_show_limits(#[case] key: TestKey, #[case] expected: bool) {
        let test = TEST_CATALOG.iter().find(|t| t.key == key).unwrap();
        assert_eq!(should_show_limits(test), expected);
    }

    #[test]
    fn test_show_limits_agrees_with_tables() {
        for test in &TEST_CATALOG {
            let show = should_show_limits(test);
            assert_eq!(lookup_limit(&ACCEPTABLE_LIMITS, test.key).is_some(), show);
            assert_eq!(lookup_limit(&PERMISSIBLE_LIMITS, test.key).is_some(), show);
        }
    }

    #[test]
    fn test_lookup_limit_values() {
        assert_eq!(lookup_limit(&ACCEPTABLE_LIMITS, TestKey::Turbidity), Some(1.0));
        assert_eq!(lookup_limit(&PERMISSIBLE_LIMITS, TestKey::Turbidity), Some(5.0));
        assert_eq!(lookup_limit(&ACCEPTABLE_LIMITS, TestKey::Hardness), Some(200.0));
        assert_eq!(lookup_limit(&PERMISSIBLE_LIMITS, TestKey::Alkalinity), Some(600.0));
        assert_eq!(lookup_limit(&ACCEPTABLE_LIMITS, TestKey::Ph), None);
        assert_eq!(lookup_limit(&PERMISSIBLE_LIMITS, TestKey::Acidity), None);
    }

    #[test]
    fn test_project_hardness() {
        let rows: Vec<_> = project_readings(&LOCATIONS, TestKey::Hardness).collect();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0], ("Abheri", 65.0));
        assert_eq!(rows[4], ("Pond 1", 152.5));
        assert_eq!(rows[9], ("Ground Water", 160.0));
    }

    #[test]
    fn test_project_preserves_order_and_restarts() {
        let names: Vec<_> = LOCATIONS.iter().map(|l| l.name).collect();
        for key in TestKey::ALL {
            let first: Vec<_> = project_readings(&LOCATIONS, key).map(|(n, _)| n).collect();
            let second: Vec<_> = project_readings(&LOCATIONS, key).map(|(n, _)| n).collect();
            assert_eq!(first, names);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_project_empty_input() {
        assert_eq!(project_readings(&[], TestKey::Ph).count(), 0);
    }

    #[test]
    fn test_default_state() {
        let state = UiSelectionState::default();
        assert_eq!(state.selected_test_id, "test-1");
        assert!(state.dark_mode);
        assert_eq!(state.active_test().name, "Hardness");
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn test_single_toggle_goes_light() {
        let mut state = UiSelectionState::default();
        state.toggle_theme();
        assert!(!state.dark_mode);
    }

    #[test]
    fn test_select_test_updates_active() {
        let mut state = UiSelectionState::default();
        state.select_test("test-3");
        assert_eq!(state.active_test().key, TestKey::Turbidity);
        assert_eq!(state.active_index(), 2);

        state.select_test("bogus");
        assert_eq!(state.active_test().id, "test-1");
        assert_eq!(state.active_index(), 0);
    }

    proptest! {
        #[test]
        fn prop_any_id_resolves_to_catalog_entry(id in ".*") {
            let test = resolve_active_test(&id);
            prop_assert!(TEST_CATALOG.iter().any(|t| t == test));
            if TEST_CATALOG.iter().all(|t| t.id != id) {
                prop_assert_eq!(test, &TEST_CATALOG[0]);
            }
        }

        #[test]
        fn prop_double_toggle_is_identity(dark in any::<bool>(), idx in 0usize..5) {
            let original = UiSelectionState::new(TEST_CATALOG[idx].id, dark);
            let mut state = original.clone();
            state.toggle_theme();
            prop_assert_ne!(state.dark_mode, original.dark_mode);
            state.toggle_theme();
            prop_assert_eq!(state, original);
        }
    }
}
