//! Unit tests for perf module.

use layout_canvas::perf::ScopedTimer;

#[test]
fn test_scoped_timer_creation() {
    // High threshold, so dropping it does not warn
    let timer = ScopedTimer::new("commit_emit", 10_000.0);
    assert_eq!(timer.name(), "commit_emit");
    assert!(timer.elapsed_ms() >= 0.0);
}

#[test]
fn test_pointer_handler_timer_drops_cleanly() {
    let timer = ScopedTimer::for_pointer_handler("gesture_update");
    drop(timer);
}
