//! Tests for the incremental reveal

use super::*;

const DELAY: Duration = Duration::from_millis(10);

#[test]
fn test_disabled_reveal_shows_full_text() {
    let mut reveal = RevealState::new(false, DELAY);
    let now = Instant::now();

    reveal.start(0, "hello", now);

    assert!(!reveal.is_active());
    assert_eq!(reveal.visible_text(0, "hello"), "hello");
}

#[test]
fn test_zero_delay_disables_reveal() {
    let reveal = RevealState::new(true, Duration::ZERO);
    assert!(!reveal.is_enabled());
}

#[test]
fn test_reveal_starts_empty_and_grows() {
    let mut reveal = RevealState::new(true, DELAY);
    let start = Instant::now();
    reveal.start(1, "hello", start);

    assert_eq!(reveal.visible_text(1, "hello"), "");

    reveal.advance(start + Duration::from_millis(30));
    assert_eq!(reveal.visible_text(1, "hello"), "hel");
    assert!(reveal.is_revealing(1));
}

#[test]
fn test_reveal_finishes_after_all_chars() {
    let mut reveal = RevealState::new(true, DELAY);
    let start = Instant::now();
    reveal.start(1, "hello", start);

    reveal.advance(start + Duration::from_millis(50));

    assert!(!reveal.is_active());
    assert_eq!(reveal.visible_text(1, "hello"), "hello");
}

#[test]
fn test_reveal_only_affects_its_message() {
    let mut reveal = RevealState::new(true, DELAY);
    reveal.start(3, "new answer", Instant::now());

    assert_eq!(reveal.visible_text(1, "old answer"), "old answer");
    assert!(!reveal.is_revealing(1));
}

#[test]
fn test_reveal_respects_char_boundaries() {
    let mut reveal = RevealState::new(true, DELAY);
    let start = Instant::now();
    reveal.start(0, "héllo wörld", start);

    reveal.advance(start + Duration::from_millis(20));

    assert_eq!(reveal.visible_text(0, "héllo wörld"), "hé");
}

#[test]
fn test_finish_shows_everything() {
    let mut reveal = RevealState::new(true, DELAY);
    reveal.start(0, "hello", Instant::now());

    reveal.finish();

    assert_eq!(reveal.visible_text(0, "hello"), "hello");
}

#[test]
fn test_empty_text_does_not_start() {
    let mut reveal = RevealState::new(true, DELAY);
    reveal.start(0, "", Instant::now());
    assert!(!reveal.is_active());
}
