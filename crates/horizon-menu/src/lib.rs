//! Immutable entry model for menus, dropdowns and select lists.
//!
//! This crate provides the data layer behind selection widgets, featuring:
//!
//! - **Entry tree**: Items, groups and separators in an ordered, two-level tree
//! - **Builders**: Assemble trees with closures, groups stamp their items with a back-reference
//! - **Selection policies**: Single, single per group, or multiple (toggling) selection
//! - **Filtering**: Derived views that keep the canonical tree and its selection intact
//! - **Diagnostics**: Malformed trees pass through and are reported, never rejected
//! - **Store**: A lock-protected holder with `changed`/`clicked` signals
//!
//! Every operation on [`Entries`] returns a new instance; nothing is mutated in place.
//!
//! # Example
//!
//! ```
//! use horizon_menu::{build_entries, ItemSelection};
//!
//! let entries = build_entries(|s: &&str| s.to_string(), ItemSelection::Single, |b| {
//!     b.group(Some("Fruits"), |g| {
//!         g.item("apple").item("banana");
//!     });
//!     b.separator();
//!     b.group(Some("Vegetables"), |g| {
//!         g.item("carrot");
//!     });
//! });
//!
//! let selected = entries.select(&"banana");
//! assert_eq!(*selected.single_selection().unwrap().item(), "banana");
//!
//! // The original instance is untouched
//! assert!(entries.selection().is_empty());
//!
//! // Filtering drops groups without matching items, the selection survives
//! let filtered = selected.filter(|s| s.starts_with('c'));
//! assert_eq!(filtered.groups().len(), 1);
//! assert_eq!(filtered.selection().len(), 1);
//! ```
//!
//! # Configuration
//!
//! ```
//! use horizon_menu::{EntriesBuilder, EntriesConfig, ItemSelection};
//!
//! let config = EntriesConfig::from_toml_str(r#"selection = "MULTIPLE""#).unwrap();
//! let mut builder = EntriesBuilder::new(|n: &u32| n.to_string(), ItemSelection::Single)
//!     .with_config(&config);
//! builder.item(1).item(2);
//!
//! let entries = builder.build().select(&1).select(&2);
//! assert_eq!(entries.selection().len(), 2);
//! ```

pub mod builder;
pub mod config;
pub mod debug;
pub mod diagnostics;
pub mod entries;
pub mod entry;
pub mod selection;
pub mod store;

mod error;

pub use builder::{EntriesBuilder, GroupBuilder, build_entries};
pub use config::EntriesConfig;
pub use debug::{EntriesTreeDebug, TreeFormatOptions, TreeStyle};
pub use diagnostics::{Diagnostic, Outcome};
pub use entries::{Entries, IdProvider, ItemFilter};
pub use entry::{DEFAULT_GROUP_ID_PREFIX, Entry, Group, GroupId, IconFn, Item};
pub use error::{Error, Result};
pub use selection::ItemSelection;
pub use store::EntriesStore;
