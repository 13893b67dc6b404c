//! Change notification for menu stores.
//!
//! A [`Signal`] keeps a list of closures and calls each of them with a shared
//! reference to the emitted value. Calls happen synchronously on the thread
//! that emits, in the order the closures were connected.
//!
//! ```
//! use horizon_menu_core::Signal;
//!
//! let picked = Signal::<String>::new();
//! let conn = picked.connect(|label| println!("picked {label}"));
//!
//! assert_eq!(picked.emit("Open".to_string()), 1);
//! assert!(picked.disconnect(conn));
//! assert_eq!(picked.emit("Save".to_string()), 0);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// Handle of one connected closure, used to disconnect it again.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// Notifies connected closures of emitted values.
///
/// `Signal` is `Send + Sync`. A closure may connect or disconnect closures on
/// the signal it is called from; such changes take effect from the next
/// emission on.
pub struct Signal<Args> {
    /// Slot map indices are reused after a disconnect, so each connection
    /// also carries its connection sequence number.
    connections: Mutex<SlotMap<ConnectionId, (u64, Slot<Args>)>>,
    next_seq: AtomicU64,
    blocked: AtomicBool,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            next_seq: AtomicU64::new(0),
            blocked: AtomicBool::new(false),
        }
    }

    /// Registers `slot` to be called on every emission.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let id = self.connections.lock().insert((seq, Arc::new(slot)));
        tracing::trace!(target: targets::SIGNAL, ?id, "slot connected");
        id
    }

    /// Removes one closure. Returns `false` if `id` was already disconnected.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Suppresses emissions until unblocked, e.g. while a store applies a
    /// batch of replacements.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Calls every connected closure with `args` and returns how many ran.
    pub fn emit(&self, args: Args) -> usize {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "emission suppressed");
            return 0;
        }

        // Snapshot so the lock is not held while slots run.
        let mut slots: Vec<(u64, Slot<Args>)> = self.connections.lock().values().cloned().collect();
        slots.sort_unstable_by_key(|(seq, _)| *seq);
        tracing::trace!(target: targets::SIGNAL, slots = slots.len(), "emit");

        for (_, slot) in &slots {
            slot(&args);
        }
        slots.len()
    }
}

static_assertions::assert_impl_all!(Signal<String>: Send, Sync);
