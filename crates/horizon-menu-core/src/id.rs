//! Process-unique identifiers.
//!
//! Generated nodes such as menu groups need an id that is stable for their
//! lifetime and distinct from every other generated id, without the caller
//! having to name them.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counter shared by all prefixes.
static ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Returns a new id of the form `<prefix>-<n>`.
///
/// The numeric part is drawn from one process-wide counter, so ids are unique
/// across prefixes as well. An empty prefix yields the bare number.
pub fn unique_id(prefix: &str) -> String {
    let n = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    if prefix.is_empty() {
        n.to_string()
    } else {
        format!("{prefix}-{n}")
    }
}
