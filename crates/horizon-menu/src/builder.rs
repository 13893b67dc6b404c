//! Builders for entry trees.
//!
//! [`EntriesBuilder`] collects top-level items, separators and groups, and
//! [`GroupBuilder`] collects the children of one group. Building a group is a
//! two-phase step: the children are assembled without a parent, then the group
//! is created and stores copies of its items that carry the group's id.
//!
//! Builders only assemble structure. Invariants such as unique ids are the
//! caller's responsibility (see [`Entries::validate`]).
//!
//! # Example
//!
//! ```
//! use horizon_menu::{build_entries, ItemSelection};
//!
//! let entries = build_entries(|s: &&str| s.to_string(), ItemSelection::SinglePerGroup, |b| {
//!     b.group(Some("Fruits"), |g| {
//!         g.item("apple").item_with("banana", |item| item.with_selected(true));
//!     });
//!     b.separator();
//!     b.group(Some("Vegetables"), |g| {
//!         g.item("carrot").item("potato");
//!     });
//! });
//!
//! assert_eq!(entries.groups().len(), 2);
//! assert_eq!(*entries.single_selection().unwrap().item(), "banana");
//! ```

use std::sync::Arc;

use crate::config::EntriesConfig;
use crate::entries::{Entries, IdProvider};
use crate::entry::{DEFAULT_GROUP_ID_PREFIX, Entry, Group, GroupId, Item};
use crate::selection::ItemSelection;

/// Creates an [`Entries`] instance from the specified code block.
///
/// - `id_provider` uniquely identifies each item
/// - `item_selection` defines how to select items
/// - `block` adds entries to the [`EntriesBuilder`]
pub fn build_entries<T, F, B>(id_provider: F, item_selection: ItemSelection, block: B) -> Entries<T>
where
    F: Fn(&T) -> String + Send + Sync + 'static,
    B: FnOnce(&mut EntriesBuilder<T>),
{
    let mut builder = EntriesBuilder::new(id_provider, item_selection);
    block(&mut builder);
    builder.build()
}

/// Builder for the top level of an entry tree.
pub struct EntriesBuilder<T> {
    id_provider: IdProvider<T>,
    item_selection: ItemSelection,
    group_id_prefix: String,
    log_diagnostics: bool,
    entries: Vec<Entry<T>>,
}

impl<T> EntriesBuilder<T> {
    pub fn new<F>(id_provider: F, item_selection: ItemSelection) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self {
            id_provider: Arc::new(id_provider),
            item_selection,
            group_id_prefix: DEFAULT_GROUP_ID_PREFIX.to_string(),
            log_diagnostics: true,
            entries: Vec::new(),
        }
    }

    /// Applies selection policy, group id prefix and diagnostic logging from a configuration.
    pub fn with_config(mut self, config: &EntriesConfig) -> Self {
        self.item_selection = config.selection;
        self.group_id_prefix = config.group_id_prefix.clone();
        self.log_diagnostics = config.log_diagnostics;
        self
    }

    /// Adds a top-level item.
    pub fn item(&mut self, item: T) -> &mut Self {
        self.entries.push(Entry::Item(Item::new(item)));
        self
    }

    /// Adds a top-level item configured by `configure`.
    pub fn item_with<F>(&mut self, item: T, configure: F) -> &mut Self
    where
        F: FnOnce(Item<T>) -> Item<T>,
    {
        self.entries.push(Entry::Item(configure(Item::new(item))));
        self
    }

    pub fn separator(&mut self) -> &mut Self {
        self.entries.push(Entry::Separator);
        self
    }

    /// Adds a group whose children are added by `block`.
    pub fn group<F>(&mut self, title: Option<&str>, block: F) -> &mut Self
    where
        F: FnOnce(&mut GroupBuilder<T>),
    {
        let mut builder = GroupBuilder::new(title).with_id_prefix(&self.group_id_prefix);
        block(&mut builder);
        self.entries.push(Entry::Group(builder.build()));
        self
    }

    /// Adds an already built entry as is.
    pub fn entry(&mut self, entry: impl Into<Entry<T>>) -> &mut Self {
        self.entries.push(entry.into());
        self
    }

    pub fn build(self) -> Entries<T> {
        Entries::from_parts(
            self.id_provider,
            self.item_selection,
            self.entries,
            self.log_diagnostics,
        )
    }
}

/// Builder for a [`Group`].
pub struct GroupBuilder<T> {
    title: Option<String>,
    id_prefix: String,
    entries: Vec<Entry<T>>,
}

impl<T> GroupBuilder<T> {
    pub fn new(title: Option<&str>) -> Self {
        Self {
            title: title.map(str::to_owned),
            id_prefix: DEFAULT_GROUP_ID_PREFIX.to_string(),
            entries: Vec::new(),
        }
    }

    /// Sets the prefix of the generated group id.
    pub fn with_id_prefix(mut self, prefix: &str) -> Self {
        self.id_prefix = prefix.to_string();
        self
    }

    pub fn item(&mut self, item: T) -> &mut Self {
        self.entries.push(Entry::Item(Item::new(item)));
        self
    }

    pub fn item_with<F>(&mut self, item: T, configure: F) -> &mut Self
    where
        F: FnOnce(Item<T>) -> Item<T>,
    {
        self.entries.push(Entry::Item(configure(Item::new(item))));
        self
    }

    pub fn separator(&mut self) -> &mut Self {
        self.entries.push(Entry::Separator);
        self
    }

    /// Creates the group and stamps its items with the generated id.
    pub fn build(self) -> Group<T> {
        Group::with_id(
            GroupId::generate(&self.id_prefix),
            self.title.as_deref(),
            self.entries,
        )
    }
}
