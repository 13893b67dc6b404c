//! Immutable collection of entries.
//!
//! [`Entries`] holds the canonical entry tree together with the id provider,
//! the selection policy and an optional filter. Every modification leads to a
//! new instance; the tree given at construction never changes.
//!
//! Entries can be obtained through different views:
//!
//! - [`all`](Entries::all): all entries given when the instance was created
//! - [`entries`](Entries::entries): entries after the optional filter has been applied to `all`
//! - [`items`](Entries::items): a flat list of all items based on `entries`
//! - [`selection`](Entries::selection): a flat list of selected items based on `all`
//!
//! # Example
//!
//! ```
//! use horizon_menu::{build_entries, ItemSelection};
//!
//! let entries = build_entries(
//!     |fruit: &String| fruit.clone(),
//!     ItemSelection::Single,
//!     |b| {
//!         b.item("apple".to_string());
//!         b.item("banana".to_string());
//!     },
//! );
//!
//! let filtered = entries.filter(|fruit| fruit.starts_with('b'));
//! assert_eq!(filtered.items().len(), 1);
//! assert_eq!(entries.items().len(), 2);
//! ```

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use horizon_menu_core::PerfSpan;
use horizon_menu_core::logging::span_names;

use crate::diagnostics::{Diagnostic, Outcome};
use crate::entry::{Entry, Group, Item, flat_items};
use crate::error::{Error, Result};
use crate::selection::ItemSelection;

/// Derives the identity of an item from its data.
///
/// Must be stable and injective over all items of one [`Entries`] instance.
pub type IdProvider<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Predicate applied to item data. Returns `true` to keep the item.
pub type ItemFilter<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Immutable snapshot of an entry tree with selection and filter state.
pub struct Entries<T> {
    id_provider: IdProvider<T>,
    item_selection: ItemSelection,
    all: Arc<[Entry<T>]>,
    filter: Option<ItemFilter<T>>,
    log_diagnostics: bool,
}

impl<T> Clone for Entries<T> {
    fn clone(&self) -> Self {
        Self {
            id_provider: self.id_provider.clone(),
            item_selection: self.item_selection,
            all: self.all.clone(),
            filter: self.filter.clone(),
            log_diagnostics: self.log_diagnostics,
        }
    }
}

impl<T> Entries<T> {
    /// Creates a new instance from a finished entry list.
    pub fn new<F>(id_provider: F, item_selection: ItemSelection, all: Vec<Entry<T>>) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self::from_parts(Arc::new(id_provider), item_selection, all, true)
    }

    pub(crate) fn from_parts(
        id_provider: IdProvider<T>,
        item_selection: ItemSelection,
        all: Vec<Entry<T>>,
        log_diagnostics: bool,
    ) -> Self {
        Self {
            id_provider,
            item_selection,
            all: all.into(),
            filter: None,
            log_diagnostics,
        }
    }

    /// Copy of this instance with a rebuilt tree, keeping policy and filter.
    pub(crate) fn with_all(&self, all: Vec<Entry<T>>) -> Self {
        Self {
            all: all.into(),
            ..self.clone()
        }
    }

    pub fn id_provider(&self) -> &IdProvider<T> {
        &self.id_provider
    }

    pub fn item_selection(&self) -> ItemSelection {
        self.item_selection
    }

    /// All entries given when this instance was created.
    pub fn all(&self) -> &[Entry<T>] {
        &self.all
    }

    pub fn has_filter(&self) -> bool {
        self.filter.is_some()
    }

    /// Whether diagnostics are logged through `tracing` in addition to being returned.
    ///
    /// Every derived view ([`entries`](Self::entries), [`groups`](Self::groups),
    /// [`items`](Self::items)) runs its own filter pass and logs what that pass
    /// finds, so reading two views logs each nested group twice. Call
    /// [`filtered`](Self::filtered) once and use [`groups_of`](Self::groups_of)
    /// and [`items_of`](Self::items_of) on the result to log once.
    pub fn log_diagnostics(&self) -> bool {
        self.log_diagnostics
    }

    /// Copy of this instance with diagnostic logging switched on or off.
    pub fn with_log_diagnostics(&self, log_diagnostics: bool) -> Self {
        Self {
            log_diagnostics,
            ..self.clone()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// The id of the given data according to the id provider.
    pub fn id_of(&self, data: &T) -> String {
        (self.id_provider)(data)
    }

    /// Finds the item in [`all`](Self::all) whose id matches the id of `data`.
    pub fn find(&self, data: &T) -> Option<&Item<T>> {
        self.find_by_id(&self.id_of(data))
    }

    pub(crate) fn find_by_id(&self, id: &str) -> Option<&Item<T>> {
        flat_items(&self.all).find(|item| (self.id_provider)(item.item()) == id)
    }

    /// Applies the specified filter and returns a new instance.
    ///
    /// Any previous filter is replaced. Selection state is not affected.
    pub fn filter<F>(&self, filter: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            filter: Some(Arc::new(filter)),
            ..self.clone()
        }
    }

    /// Removes any filter and returns a new instance.
    pub fn clear_filter(&self) -> Self {
        Self {
            filter: None,
            ..self.clone()
        }
    }

    /// Checks the invariants that the operations only assume.
    ///
    /// Reports the first nested group or the first id shared by two items.
    /// None of the other operations call this; it is meant for tests and for
    /// callers that build entries from untrusted input.
    pub fn validate(&self) -> Result<()> {
        for group in self.all.iter().filter_map(Entry::as_group) {
            if let Some(nested) = group.entries().iter().find_map(Entry::as_group) {
                return Err(Error::NestedGroup {
                    parent: group.id().clone(),
                    child: nested.id().clone(),
                });
            }
        }

        let mut seen = HashSet::new();
        for item in flat_items(&self.all) {
            let id = (self.id_provider)(item.item());
            if !seen.insert(id.clone()) {
                return Err(Error::DuplicateItemId { id });
            }
        }
        Ok(())
    }

    pub(crate) fn report(&self, diagnostics: &[Diagnostic]) {
        if self.log_diagnostics {
            diagnostics.iter().for_each(Diagnostic::log);
        }
    }

    fn accepts(&self, item: &Item<T>) -> bool {
        self.filter.as_ref().is_none_or(|filter| filter(item.item()))
    }
}

impl<T: Clone> Entries<T> {
    /// Entries after the optional filter has been applied to [`all`](Self::all).
    ///
    /// Groups without any remaining item are omitted. Computed on every call.
    pub fn entries(&self) -> Vec<Entry<T>> {
        self.filtered().value
    }

    /// Like [`entries`](Self::entries), but also returns the diagnostics
    /// produced while filtering.
    pub fn filtered(&self) -> Outcome<Vec<Entry<T>>> {
        let _span = PerfSpan::new(span_names::FILTER);
        let mut diagnostics = Vec::new();
        let mut entries = Vec::with_capacity(self.all.len());

        for entry in self.all.iter() {
            match entry {
                Entry::Group(group) => {
                    let group = self.filter_group(group, &mut diagnostics);
                    if group.has_items() {
                        entries.push(Entry::Group(group));
                    }
                }
                Entry::Item(item) => {
                    if self.accepts(item) {
                        entries.push(entry.clone());
                    }
                }
                Entry::Separator => entries.push(Entry::Separator),
            }
        }

        self.report(&diagnostics);
        Outcome::new(entries, diagnostics)
    }

    fn filter_group(&self, group: &Group<T>, diagnostics: &mut Vec<Diagnostic>) -> Group<T> {
        let mut children = Vec::with_capacity(group.entries().len());
        for child in group.entries() {
            let keep = match child {
                Entry::Group(nested) => {
                    diagnostics.push(Diagnostic::nested_group(group, nested));
                    true
                }
                Entry::Item(item) => self.accepts(item),
                Entry::Separator => true,
            };
            if keep {
                children.push(child.clone());
            }
        }
        group.with_entries(children)
    }

    /// All groups based on [`entries`](Self::entries).
    pub fn groups(&self) -> Vec<Group<T>> {
        Self::groups_of(&self.entries())
    }

    /// A flat list of all items based on [`entries`](Self::entries).
    pub fn items(&self) -> Vec<Item<T>> {
        Self::items_of(&self.entries())
    }

    /// The groups among already derived entries, without another filter pass.
    pub fn groups_of(entries: &[Entry<T>]) -> Vec<Group<T>> {
        entries.iter().filter_map(Entry::as_group).cloned().collect()
    }

    /// The items among already derived entries, without another filter pass.
    pub fn items_of(entries: &[Entry<T>]) -> Vec<Item<T>> {
        flat_items(entries).cloned().collect()
    }

    /// The selected items based on [`all`](Self::all), in tree order.
    ///
    /// Filtering never hides selected items from this list.
    pub fn selection(&self) -> Vec<Item<T>> {
        flat_items(&self.all)
            .filter(|item| item.is_selected())
            .cloned()
            .collect()
    }

    /// First selected item (if any).
    pub fn single_selection(&self) -> Option<Item<T>> {
        flat_items(&self.all).find(|item| item.is_selected()).cloned()
    }
}

impl<T: PartialEq> PartialEq for Entries<T> {
    fn eq(&self, other: &Self) -> bool {
        let same_filter = match (&self.filter, &other.filter) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        };
        Arc::ptr_eq(&self.id_provider, &other.id_provider)
            && self.item_selection == other.item_selection
            && self.log_diagnostics == other.log_diagnostics
            && same_filter
            && self.all == other.all
    }
}

impl<T: fmt::Debug> fmt::Debug for Entries<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entries")
            .field("item_selection", &self.item_selection)
            .field("all", &self.all)
            .field("has_filter", &self.filter.is_some())
            .field("log_diagnostics", &self.log_diagnostics)
            .finish()
    }
}

static_assertions::assert_impl_all!(Entries<String>: Send, Sync, Clone);
