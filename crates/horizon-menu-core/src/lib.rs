//! Core systems for Horizon Menu.
//!
//! This crate provides the small runtime pieces the entry model builds on:
//!
//! - **Signal/Slot System**: Type-safe notification of connected closures
//! - **Identifiers**: Process-unique, prefixed ids for generated nodes
//! - **Logging**: `tracing` targets, span names and performance spans
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_menu_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Identifier Example
//!
//! ```
//! use horizon_menu_core::id::unique_id;
//!
//! let first = unique_id("grp");
//! let second = unique_id("grp");
//! assert!(first.starts_with("grp-"));
//! assert_ne!(first, second);
//! ```

pub mod id;
pub mod logging;
pub mod signal;

pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal};
