//! Diagnostic warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the geometry, selector, and traversal components to report
//! measurements, selectors, or clipboard writes they had to skip.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already reported (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// When set, warnings are still recorded but nothing is printed.
static QUIET: AtomicBool = AtomicBool::new(false);

fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    // A panic while holding the lock leaves the set usable; keep going.
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about input that was skipped (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Geometry", "cannot subtract '2em' from '10px'");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = warned()
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_print && !QUIET.load(Ordering::Relaxed) {
        eprintln!("{}", format!("[Ruler {component}] ⚠ {message}").yellow());
    }
}

/// Whether `warn_once` has already recorded this exact message.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    warned()
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Suppress (or re-enable) printing. Recording continues either way.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}
