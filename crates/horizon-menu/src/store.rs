//! Store owning the current [`Entries`] of a widget.
//!
//! `EntriesStore` holds one `Entries` snapshot and replaces it on every
//! modification. Writers are serialised by a lock and the last write wins;
//! readers get a cheap clone of the snapshot that stays valid no matter what
//! happens to the store afterwards.
//!
//! # Signals
//!
//! - `changed`: Emitted with the new entries after every replacement
//! - `clicked`: Emitted with the payload passed to [`select`](EntriesStore::select)
//!
//! `changed` delivers replacements one at a time, in the order they were
//! written, so the last value observers receive is the one the store holds.
//! A replacement made while `changed` is being delivered (by a slot, or by
//! another thread) is queued and delivered by the emission already running,
//! after it finishes with the current value.
//!
//! # Example
//!
//! ```
//! use horizon_menu::{build_entries, EntriesStore, ItemSelection};
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let entries = build_entries(|s: &String| s.clone(), ItemSelection::Single, |b| {
//!     b.item("open".to_string()).item("save".to_string());
//! });
//! let store = EntriesStore::new(entries);
//!
//! let changes = Arc::new(AtomicUsize::new(0));
//! let counter = changes.clone();
//! store.changed().connect(move |_| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! assert!(store.select(&"save".to_string()));
//! assert_eq!(store.current().single_selection().unwrap().item(), "save");
//! assert_eq!(changes.load(Ordering::SeqCst), 1);
//! ```

use std::collections::VecDeque;

use parking_lot::{Mutex, RwLock};

use horizon_menu_core::logging::{span_names, targets};
use horizon_menu_core::{PerfSpan, Signal};

use crate::entries::Entries;

/// Holds the current entries and notifies observers of replacements.
pub struct EntriesStore<T> {
    entries: RwLock<Entries<T>>,
    pending: Mutex<Pending<T>>,
    changed: Signal<Entries<T>>,
    clicked: Signal<T>,
}

/// Replacements not yet delivered through `changed`.
struct Pending<T> {
    queue: VecDeque<Entries<T>>,
    emitting: bool,
}

impl<T: Clone + Send + Sync + 'static> EntriesStore<T> {
    pub fn new(entries: Entries<T>) -> Self {
        Self {
            entries: RwLock::new(entries),
            pending: Mutex::new(Pending {
                queue: VecDeque::new(),
                emitting: false,
            }),
            changed: Signal::new(),
            clicked: Signal::new(),
        }
    }

    /// Snapshot of the current entries.
    pub fn current(&self) -> Entries<T> {
        self.entries.read().clone()
    }

    pub fn changed(&self) -> &Signal<Entries<T>> {
        &self.changed
    }

    pub fn clicked(&self) -> &Signal<T> {
        &self.clicked
    }

    /// Replaces the held entries.
    pub fn update(&self, entries: Entries<T>) {
        self.replace(|_| Some(entries));
    }

    /// Selects `data` in the current entries.
    ///
    /// Always emits `clicked`. Returns `false` and leaves the store untouched
    /// if no item has the id of `data`.
    pub fn select(&self, data: &T) -> bool {
        let changed = self.replace(|current| {
            current.find(data)?;
            Some(current.select(data))
        });
        self.clicked.emit(data.clone());
        changed
    }

    /// Applies a filter to the current entries.
    pub fn filter<F>(&self, filter: F)
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.replace(|current| Some(current.filter(filter)));
    }

    /// Removes the filter from the current entries.
    pub fn clear_filter(&self) {
        self.replace(|current| Some(current.clear_filter()));
    }

    /// Computes the next value from one snapshot under the write lock and
    /// queues it for `changed` before the lock is released.
    fn replace<F>(&self, next: F) -> bool
    where
        F: FnOnce(&Entries<T>) -> Option<Entries<T>>,
    {
        let _span = PerfSpan::new(span_names::STORE_UPDATE);
        {
            let mut guard = self.entries.write();
            let Some(entries) = next(&*guard) else {
                tracing::trace!(target: targets::STORE, "entries unchanged");
                return false;
            };
            *guard = entries.clone();
            self.pending.lock().queue.push_back(entries);
        }

        tracing::trace!(target: targets::STORE, "entries replaced");
        self.deliver();
        true
    }

    /// Emits queued replacements unless an emission is already running, in
    /// which case that emission picks them up.
    fn deliver(&self) {
        {
            let mut pending = self.pending.lock();
            if pending.emitting {
                tracing::trace!(target: targets::STORE, queued = pending.queue.len(), "change queued");
                return;
            }
            pending.emitting = true;
        }

        loop {
            let next = {
                let mut pending = self.pending.lock();
                let next = pending.queue.pop_front();
                if next.is_none() {
                    pending.emitting = false;
                }
                next
            };
            let Some(entries) = next else { break };
            self.changed.emit(entries);
        }
    }
}
