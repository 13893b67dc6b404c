//! Logging facilities for Horizon Menu.
//!
//! Horizon Menu uses the `tracing` crate for instrumentation. The library never
//! installs a subscriber; to see logs, install one in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_menu=debug")
//!     .init();
//! ```
//!
//! Nested-group diagnostics are logged at `warn`, unknown selection targets at
//! `debug`, and store/signal traffic at `trace`. Use the [`targets`] constants
//! in `EnvFilter` directives to narrow the output to one subsystem, e.g.
//! `RUST_LOG=horizon_menu::selection=debug`.

/// Span names used throughout Horizon Menu for tracing.
pub mod span_names {
    /// Filtered view derivation.
    pub const FILTER: &str = "horizon_menu::filter";
    /// Selection pass over the entry tree.
    pub const SELECT: &str = "horizon_menu::select";
    /// Store replacement of the held entries.
    pub const STORE_UPDATE: &str = "horizon_menu::store_update";
}

/// Target names for log filtering.
pub mod targets {
    /// Entry tree and filtered views.
    pub const ENTRIES: &str = "horizon_menu::entries";
    /// Selection policies.
    pub const SELECTION: &str = "horizon_menu::selection";
    /// Entries store.
    pub const STORE: &str = "horizon_menu::store";
    /// Signal/slot system.
    pub const SIGNAL: &str = "horizon_menu_core::signal";
}

/// Target of the spans opened by [`PerfSpan`].
pub const PERF_TARGET: &str = "horizon_menu::perf";

/// Entered `info` span around one tree transformation.
///
/// The span closes when the guard is dropped, so a subscriber with span
/// timing shows how long filtering or a selection pass took.
#[derive(Debug)]
pub struct PerfSpan {
    _entered: tracing::span::EnteredSpan,
}

impl PerfSpan {
    pub fn new(operation: &'static str) -> Self {
        let span = tracing::info_span!(target: PERF_TARGET, "perf", operation);
        Self {
            _entered: span.entered(),
        }
    }
}
