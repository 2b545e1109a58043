//! Tests for suggestion selection

use super::*;
use proptest::prelude::*;

#[test]
fn test_new_has_no_selection() {
    assert_eq!(SelectionState::new().get_selected(), None);
}

#[test]
fn test_navigate_next_starts_at_first_and_wraps() {
    let mut selection = SelectionState::new();

    selection.navigate_next(3);
    assert_eq!(selection.get_selected(), Some(0));
    selection.navigate_next(3);
    selection.navigate_next(3);
    assert_eq!(selection.get_selected(), Some(2));
    selection.navigate_next(3);
    assert_eq!(selection.get_selected(), Some(0));
}

#[test]
fn test_navigate_previous_starts_at_last_and_wraps() {
    let mut selection = SelectionState::new();

    selection.navigate_previous(3);
    assert_eq!(selection.get_selected(), Some(2));
    selection.navigate_previous(3);
    selection.navigate_previous(3);
    assert_eq!(selection.get_selected(), Some(0));
    selection.navigate_previous(3);
    assert_eq!(selection.get_selected(), Some(2));
}

#[test]
fn test_navigation_with_no_suggestions_is_noop() {
    let mut selection = SelectionState::new();
    selection.navigate_next(0);
    selection.navigate_previous(0);
    assert_eq!(selection.get_selected(), None);
}

#[test]
fn test_clear_selection() {
    let mut selection = SelectionState::new();
    selection.navigate_next(2);
    selection.clear_selection();
    assert_eq!(selection.get_selected(), None);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Any sequence of moves keeps the selection within bounds
    #[test]
    fn prop_selection_stays_in_bounds(
        count in 1usize..10,
        moves in prop::collection::vec(prop::bool::ANY, 1..30),
    ) {
        let mut selection = SelectionState::new();
        for forward in moves {
            if forward {
                selection.navigate_next(count);
            } else {
                selection.navigate_previous(count);
            }
            let selected = selection.get_selected();
            prop_assert!(selected.is_some_and(|i| i < count));
        }
    }
}
