//! Toolchain warnings with colored terminal output.
//!
//! Provides deduplication so a stylesheet or template that repeats the same
//! unsupported construct produces a single line on stderr. Used by the
//! selector parser to report syntax it accepts but drops.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already recorded (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// When set, warnings are still recorded but never printed.
static QUIET: AtomicBool = AtomicBool::new(false);

fn warning_key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about an unsupported construct (prints once per unique message)
///
/// # Example
/// ```
/// selkit_common::warning::warn_once("Selector", "pseudo-class ':hover' is ignored");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let newly_recorded = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(warning_key(component, message));

    if newly_recorded && !QUIET.load(Ordering::Relaxed) {
        let line = format!("[selkit {component}] ⚠ {message}");
        eprintln!("{}", line.yellow());
    }
}

/// Whether `warn_once` has already recorded this exact warning.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&warning_key(component, message)))
}

/// Clear all recorded warnings (call between independent compilation runs)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

/// Suppress (or re-enable) printing of warnings.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}
