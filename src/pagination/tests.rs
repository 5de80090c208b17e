//! Tests for cursor tracking

use super::*;
use crate::error::Error;

#[test]
fn test_initial_cursor() {
    let tracker = CursorTracker::new("spaces", 1_700_000_000_000);
    assert_eq!(tracker.cursor(), 1_700_000_000_000);
}

#[test]
fn test_advance_moves_cursor_to_terminal_key() {
    let mut tracker = CursorTracker::new("content", 1_700_000_000_000);

    tracker.advance(1_600_000_000_000).unwrap();
    assert_eq!(tracker.cursor(), 1_600_000_000_000);

    tracker.advance(1_500_000_000_000).unwrap();
    assert_eq!(tracker.cursor(), 1_500_000_000_000);
}

#[test]
fn test_duplicate_terminal_key_is_no_progress() {
    let mut tracker = CursorTracker::new("content", 1_700_000_000_000);
    tracker.advance(1_600_000_000_000).unwrap();

    let err = tracker.advance(1_600_000_000_000).unwrap_err();
    match err {
        Error::NoProgress { collection, cursor } => {
            assert_eq!(collection, "content");
            assert_eq!(cursor, 1_600_000_000_000);
        }
        other => panic!("expected NoProgress, got {other:?}"),
    }
}

#[test]
fn test_repeating_start_cursor_is_allowed_once() {
    // A first page ending exactly on the start cursor is fine: the guard
    // compares terminal keys of consecutive pages, not the request cursor.
    let mut tracker = CursorTracker::new("spaces", 1_700_000_000_000);
    tracker.advance(1_700_000_000_000).unwrap();
    assert_eq!(tracker.cursor(), 1_700_000_000_000);

    assert!(tracker.advance(1_700_000_000_000).unwrap_err().is_no_progress());
}

#[test]
fn test_now_ms_is_plausible() {
    // 2020-01-01 in ms; anything after that is a sane wall clock
    assert!(now_ms() > 1_577_836_800_000);
}
