//! Selection policies and the selection pass over an entry tree.
//!
//! Selecting never mutates an [`Entries`] instance. [`Entries::select`]
//! rebuilds the whole tree, deciding the `selected` flag of every item from
//! the instance's [`ItemSelection`]:
//!
//! | Policy | Top-level item | Group member |
//! |---|---|---|
//! | `Single` | selected iff it is the target | selected iff it is the target and no earlier group holds the selection |
//! | `SinglePerGroup` | selected iff it is the target | the target is selected, its group siblings are deselected, other groups keep their state |
//! | `Multiple` | the target toggles | the target toggles |

use serde::{Deserialize, Serialize};

use horizon_menu_core::PerfSpan;
use horizon_menu_core::logging::{span_names, targets};

use crate::diagnostics::{Diagnostic, Outcome};
use crate::entries::{Entries, IdProvider};
use crate::entry::{Entry, Group, GroupId, Item};

/// Controls how items are selected in [`Entries`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemSelection {
    /// Only a single item (across all groups) can be selected at a time.
    #[default]
    Single,
    /// Only one item per group can be selected at a time.
    SinglePerGroup,
    /// Multiple items can be selected.
    Multiple,
}

/// State threaded through one selection pass.
struct SelectionPass<'a, T> {
    policy: ItemSelection,
    id_provider: &'a IdProvider<T>,
    target_id: &'a str,
    target_group: Option<&'a GroupId>,
    /// Set once a group came out of the pass holding a selection.
    group_with_selection: bool,
    diagnostics: Vec<Diagnostic>,
}

impl<T: Clone> SelectionPass<'_, T> {
    fn matches(&self, item: &Item<T>) -> bool {
        (self.id_provider)(item.item()) == self.target_id
    }

    fn top_level(&self, item: &Item<T>) -> Item<T> {
        let matches = self.matches(item);
        let selected = match self.policy {
            ItemSelection::Single | ItemSelection::SinglePerGroup => matches,
            ItemSelection::Multiple => matches != item.is_selected(),
        };
        item.with_selection(selected)
    }

    fn member(&self, item: &Item<T>) -> Item<T> {
        let matches = self.matches(item);
        let selected = match self.policy {
            ItemSelection::Single => matches && !self.group_with_selection,
            ItemSelection::SinglePerGroup => {
                if matches {
                    true
                } else if item.group() == self.target_group {
                    false
                } else {
                    item.is_selected()
                }
            }
            ItemSelection::Multiple => matches != item.is_selected(),
        };
        item.with_selection(selected)
    }

    fn group(&mut self, group: &Group<T>) -> Group<T> {
        let mut children = Vec::with_capacity(group.entries().len());
        for child in group.entries() {
            let child = match child {
                Entry::Group(nested) => {
                    self.diagnostics.push(Diagnostic::nested_group(group, nested));
                    child.clone()
                }
                Entry::Item(item) => Entry::Item(self.member(item)),
                Entry::Separator => Entry::Separator,
            };
            children.push(child);
        }

        let group = group.with_entries(children);
        self.group_with_selection |= group.has_selection();
        group
    }
}

impl<T: Clone> Entries<T> {
    /// Selects the item identified by `data` and returns a new instance.
    ///
    /// Selecting an item might unselect other items depending on
    /// [`item_selection`](Self::item_selection). If no item has the id of
    /// `data`, an unchanged copy is returned.
    ///
    /// With [`ItemSelection::Single`], should the same id appear in several
    /// groups despite the uniqueness contract, only the first such group in
    /// tree order keeps the selection.
    pub fn select(&self, data: &T) -> Self {
        self.select_diagnosed(data).value
    }

    /// Like [`select`](Self::select), but also returns the diagnostics
    /// produced during the pass.
    pub fn select_diagnosed(&self, data: &T) -> Outcome<Self> {
        let _span = PerfSpan::new(span_names::SELECT);
        let target_id = self.id_of(data);

        let Some(target) = self.find_by_id(&target_id) else {
            let diagnostics = vec![Diagnostic::UnknownSelectionTarget { id: target_id }];
            self.report(&diagnostics);
            return Outcome::new(self.clone(), diagnostics);
        };

        let mut pass = SelectionPass {
            policy: self.item_selection(),
            id_provider: self.id_provider(),
            target_id: &target_id,
            target_group: target.group(),
            group_with_selection: false,
            diagnostics: Vec::new(),
        };

        let all = self
            .all()
            .iter()
            .map(|entry| match entry {
                Entry::Group(group) => Entry::Group(pass.group(group)),
                Entry::Item(item) => Entry::Item(pass.top_level(item)),
                Entry::Separator => Entry::Separator,
            })
            .collect();

        tracing::debug!(
            target: targets::SELECTION,
            id = %target_id,
            policy = ?self.item_selection(),
            "selected item"
        );

        let diagnostics = pass.diagnostics;
        self.report(&diagnostics);
        Outcome::new(self.with_all(all), diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected(entries: &Entries<&'static str>) -> Vec<&'static str> {
        entries.selection().iter().map(|item| *item.item()).collect()
    }

    fn two_groups(policy: ItemSelection) -> Entries<&'static str> {
        Entries::new(
            |s: &&str| s.to_string(),
            policy,
            vec![
                Item::new("top").into(),
                Group::new(Some("G1"), vec![Item::new("a").into(), Item::new("b").into()]).into(),
                Entry::Separator,
                Group::new(Some("G2"), vec![Item::new("c").into(), Item::new("d").into()]).into(),
            ],
        )
    }

    #[test]
    fn test_default_policy() {
        assert_eq!(ItemSelection::default(), ItemSelection::Single);
    }

    #[test]
    fn test_single_replaces_selection() {
        let entries = two_groups(ItemSelection::Single);
        let entries = entries.select(&"a");
        assert_eq!(selected(&entries), vec!["a"]);
        let entries = entries.select(&"d");
        assert_eq!(selected(&entries), vec!["d"]);
        let entries = entries.select(&"top");
        assert_eq!(selected(&entries), vec!["top"]);
    }

    #[test]
    fn test_single_first_group_wins_for_duplicate_ids() {
        // Ids are expected to be unique; this pins the behavior when they are not.
        let entries = Entries::new(
            |s: &&str| s.to_string(),
            ItemSelection::Single,
            vec![
                Group::new(None, vec![Item::new("x").into()]).into(),
                Group::new(None, vec![Item::new("y").into(), Item::new("x").into()]).into(),
                Group::new(None, vec![Item::new("x").into()]).into(),
            ],
        );

        let entries = entries.select(&"x");
        let flags: Vec<bool> = entries
            .groups()
            .iter()
            .flat_map(|group| group.items().map(Item::is_selected).collect::<Vec<_>>())
            .collect();
        assert_eq!(flags, vec![true, false, false, false]);
    }

    #[test]
    fn test_single_per_group_deselects_siblings_only() {
        let entries = two_groups(ItemSelection::SinglePerGroup);
        let entries = entries.select(&"a").select(&"c");
        assert_eq!(selected(&entries), vec!["a", "c"]);

        let entries = entries.select(&"b");
        assert_eq!(selected(&entries), vec!["b", "c"]);
    }

    #[test]
    fn test_single_per_group_top_level_target_keeps_groups() {
        let entries = two_groups(ItemSelection::SinglePerGroup).select(&"a");
        let entries = entries.select(&"top");
        assert_eq!(selected(&entries), vec!["top", "a"]);

        // selecting a member resets top-level items
        let entries = entries.select(&"d");
        assert_eq!(selected(&entries), vec!["a", "d"]);
    }

    #[test]
    fn test_multiple_toggles() {
        let entries = two_groups(ItemSelection::Multiple);
        let entries = entries.select(&"a").select(&"top").select(&"d");
        assert_eq!(selected(&entries), vec!["top", "a", "d"]);

        let entries = entries.select(&"a");
        assert_eq!(selected(&entries), vec!["top", "d"]);
    }

    #[test]
    fn test_unknown_target_is_reported() {
        let entries = two_groups(ItemSelection::Single).with_log_diagnostics(false);
        let outcome = entries.select_diagnosed(&"zzz");
        assert_eq!(outcome.value, entries);
        assert_eq!(
            outcome.diagnostics,
            vec![Diagnostic::UnknownSelectionTarget { id: "zzz".into() }]
        );
    }

    #[test]
    fn test_select_keeps_filter() {
        let entries = two_groups(ItemSelection::Single).filter(|s| *s != "b");
        let entries = entries.select(&"b");
        assert!(entries.has_filter());
        assert_eq!(selected(&entries), vec!["b"]);
        assert!(entries.items().iter().all(|item| *item.item() != "b"));
    }

    #[test]
    fn test_policy_serde_names() {
        let json = serde_json::to_string(&ItemSelection::SinglePerGroup).unwrap();
        assert_eq!(json, "\"SINGLE_PER_GROUP\"");
        let policy: ItemSelection = serde_json::from_str("\"MULTIPLE\"").unwrap();
        assert_eq!(policy, ItemSelection::Multiple);
    }
}
