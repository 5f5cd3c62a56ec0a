//! Tests for the deduplicating warning sink.

use selkit_common::warning::{has_warned, set_quiet, warn_once};

#[test]
fn test_warn_once_records_message() {
    set_quiet(true);
    warn_once("Test", "records a message");
    assert!(has_warned("Test", "records a message"));
    assert!(!has_warned("Test", "a message nobody sent"));
}

#[test]
fn test_warning_key_includes_component() {
    set_quiet(true);
    warn_once("Parser", "shared text");
    assert!(has_warned("Parser", "shared text"));
    assert!(!has_warned("Encoder", "shared text"));
}

#[test]
fn test_repeated_warning_is_recorded_once() {
    set_quiet(true);
    warn_once("Test", "repeated warning");
    warn_once("Test", "repeated warning");
    assert!(has_warned("Test", "repeated warning"));
}
