//! Entry tree types.
//!
//! An [`Entry`] is either an [`Item`], a [`Group`] or a [`Separator`](Entry::Separator).
//! Entries form an ordered forest at most two levels deep: top-level items,
//! groups and separators, where groups contain items and separators only.

use std::fmt;
use std::sync::Arc;

use horizon_menu_core::id::unique_id;

/// Prefix used for generated group ids unless configured otherwise.
pub const DEFAULT_GROUP_ID_PREFIX: &str = "grp";

/// Stable identifier of a [`Group`].
///
/// Items keep the id of their enclosing group as a non-owning back-reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(Arc<str>);

impl GroupId {
    /// Generates a process-unique id of the form `<prefix>-<n>`.
    pub fn generate(prefix: &str) -> Self {
        Self(unique_id(prefix).into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GroupId {
    fn from(id: &str) -> Self {
        Self(id.into())
    }
}

impl From<String> for GroupId {
    fn from(id: String) -> Self {
        Self(id.into())
    }
}

/// Render hook producing the icon content of an item.
///
/// The entry model never calls it; rendering adapters do.
pub type IconFn = Arc<dyn Fn() -> String + Send + Sync>;

/// Item containing the actual data and presentation properties.
///
/// Items are immutable. The `with_*` methods consume the item and return a
/// modified copy, which makes them usable while building entries:
///
/// ```
/// use horizon_menu::Item;
///
/// let item = Item::new("apple")
///     .with_text("Apple")
///     .with_description("A round fruit")
///     .with_disabled(true);
///
/// assert_eq!(item.text(), Some("Apple"));
/// assert!(item.is_disabled());
/// assert!(item.group().is_none());
/// ```
#[derive(Clone)]
pub struct Item<T> {
    item: T,
    text: Option<String>,
    disabled: bool,
    selected: bool,
    favorite: bool,
    href: Option<String>,
    description: Option<String>,
    icon: Option<IconFn>,
    group: Option<GroupId>,
}

impl<T> Item<T> {
    /// Creates an enabled, unselected top-level item.
    pub fn new(item: T) -> Self {
        Self {
            item,
            text: None,
            disabled: false,
            selected: false,
            favorite: false,
            href: None,
            description: None,
            icon: None,
            group: None,
        }
    }

    /// Sets the text used for the visual representation.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets whether this item is disabled.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets whether this item is initially selected.
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Sets whether this item is marked as a favorite.
    pub fn with_favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }

    /// Sets an optional link.
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Sets an optional description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the icon render hook.
    pub fn with_icon<F>(mut self, icon: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.icon = Some(Arc::new(icon));
        self
    }

    /// The actual data.
    pub fn item(&self) -> &T {
        &self.item
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_favorite(&self) -> bool {
        self.favorite
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn icon(&self) -> Option<&IconFn> {
        self.icon.as_ref()
    }

    /// Invokes the icon hook, if any.
    pub fn render_icon(&self) -> Option<String> {
        self.icon.as_ref().map(|icon| icon())
    }

    /// The id of the enclosing group, `None` for top-level items.
    pub fn group(&self) -> Option<&GroupId> {
        self.group.as_ref()
    }

    /// Second build phase: attaches the id of the group that now owns this item.
    pub(crate) fn in_group(mut self, group: GroupId) -> Self {
        self.group = Some(group);
        self
    }
}

impl<T: Clone> Item<T> {
    /// Returns a copy with the given selection state.
    pub(crate) fn with_selection(&self, selected: bool) -> Self {
        Self {
            selected,
            ..self.clone()
        }
    }
}

impl<T: PartialEq> PartialEq for Item<T> {
    fn eq(&self, other: &Self) -> bool {
        let same_icon = match (&self.icon, &other.icon) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        };
        self.item == other.item
            && self.text == other.text
            && self.disabled == other.disabled
            && self.selected == other.selected
            && self.favorite == other.favorite
            && self.href == other.href
            && self.description == other.description
            && self.group == other.group
            && same_icon
    }
}

impl<T: fmt::Debug> fmt::Debug for Item<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("item", &self.item)
            .field("text", &self.text)
            .field("disabled", &self.disabled)
            .field("selected", &self.selected)
            .field("favorite", &self.favorite)
            .field("href", &self.href)
            .field("description", &self.description)
            .field("icon", &self.icon.as_ref().map(|_| "<icon>"))
            .field("group", &self.group)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Item<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Item(item={}, disabled={}, selected={}",
            self.item, self.disabled, self.selected
        )?;
        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            write!(f, ", description={description}")?;
        }
        if self.icon.is_some() {
            f.write_str(", with icon")?;
        }
        if let Some(group) = &self.group {
            write!(f, ", group={group}")?;
        }
        f.write_str(")")
    }
}

/// Group containing nested entries and an optional title.
///
/// A group may contain [`Item`]s and separators, but must **not** contain
/// nested groups. Nested groups are tolerated: filtering and selection pass
/// them through untouched and report a
/// [`Diagnostic::NestedGroup`](crate::Diagnostic::NestedGroup).
#[derive(Clone)]
pub struct Group<T> {
    id: GroupId,
    title: Option<String>,
    entries: Vec<Entry<T>>,
}

impl<T> Group<T> {
    /// Creates a group with a generated id.
    ///
    /// Every direct [`Item`] child is stamped with the new group's id.
    pub fn new(title: Option<&str>, entries: Vec<Entry<T>>) -> Self {
        Self::with_id(GroupId::generate(DEFAULT_GROUP_ID_PREFIX), title, entries)
    }

    /// Creates a group with an explicit id.
    pub fn with_id(id: GroupId, title: Option<&str>, entries: Vec<Entry<T>>) -> Self {
        let entries = entries
            .into_iter()
            .map(|entry| match entry {
                Entry::Item(item) => Entry::Item(item.in_group(id.clone())),
                other => other,
            })
            .collect();
        Self {
            id,
            title: title.map(str::to_owned),
            entries,
        }
    }

    pub fn id(&self) -> &GroupId {
        &self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// All child entries in order.
    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    /// The direct [`Item`] children, separators and nested groups excluded.
    pub fn items(&self) -> impl Iterator<Item = &Item<T>> {
        self.entries.iter().filter_map(Entry::as_item)
    }

    /// Returns true if at least one direct item child is selected.
    pub fn has_selection(&self) -> bool {
        self.items().any(Item::is_selected)
    }

    pub(crate) fn has_items(&self) -> bool {
        self.items().next().is_some()
    }

    /// Copy of this group with replaced children, keeping id and title.
    ///
    /// The children are expected to be copies of this group's own entries,
    /// so their back-references are already in place.
    pub(crate) fn with_entries(&self, entries: Vec<Entry<T>>) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            entries,
        }
    }
}

impl<T: PartialEq> PartialEq for Group<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.title == other.title && self.entries == other.entries
    }
}

impl<T: fmt::Debug> fmt::Debug for Group<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("entries", &self.entries)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Group<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Group(id={}, entries=[", self.id)?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{entry}")?;
        }
        f.write_str("])")
    }
}

/// An entry is either an [`Item`], a [`Group`] or a separator.
#[derive(Clone)]
pub enum Entry<T> {
    /// Titled container of items and separators.
    Group(Group<T>),
    /// Selectable leaf carrying user data.
    Item(Item<T>),
    /// Visual separator without data.
    Separator,
}

impl<T> Entry<T> {
    pub fn as_item(&self) -> Option<&Item<T>> {
        match self {
            Self::Item(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&Group<T>> {
        match self {
            Self::Group(group) => Some(group),
            _ => None,
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, Self::Separator)
    }
}

impl<T> From<Item<T>> for Entry<T> {
    fn from(item: Item<T>) -> Self {
        Self::Item(item)
    }
}

impl<T> From<Group<T>> for Entry<T> {
    fn from(group: Group<T>) -> Self {
        Self::Group(group)
    }
}

impl<T: PartialEq> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Group(a), Self::Group(b)) => a == b,
            (Self::Item(a), Self::Item(b)) => a == b,
            (Self::Separator, Self::Separator) => true,
            _ => false,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Entry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Group(group) => group.fmt(f),
            Self::Item(item) => item.fmt(f),
            Self::Separator => f.write_str("Separator"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Entry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Group(group) => group.fmt(f),
            Self::Item(item) => item.fmt(f),
            Self::Separator => f.write_str("Separator"),
        }
    }
}

/// Flattens entries into their items in tree order, group members in place of
/// their group. Separators and nested groups contribute nothing.
pub(crate) fn flat_items<T>(entries: &[Entry<T>]) -> impl Iterator<Item = &Item<T>> {
    entries.iter().flat_map(|entry| {
        let (members, top_level) = match entry {
            Entry::Group(group) => (Some(group.items()), None),
            Entry::Item(item) => (None, Some(item)),
            Entry::Separator => (None, None),
        };
        members.into_iter().flatten().chain(top_level)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_defaults() {
        let item = Item::new(1);
        assert_eq!(*item.item(), 1);
        assert!(!item.is_disabled());
        assert!(!item.is_selected());
        assert!(!item.is_favorite());
        assert!(item.text().is_none());
        assert!(item.render_icon().is_none());
        assert!(item.group().is_none());
    }

    #[test]
    fn test_group_stamps_items() {
        let group = Group::new(
            Some("Fruits"),
            vec![Item::new("apple").into(), Entry::Separator, Item::new("banana").into()],
        );

        assert_eq!(group.title(), Some("Fruits"));
        assert!(group.id().as_str().starts_with("grp-"));
        assert_eq!(group.items().count(), 2);
        for item in group.items() {
            assert_eq!(item.group(), Some(group.id()));
        }
    }

    #[test]
    fn test_group_does_not_restamp_nested_group_items() {
        let inner = Group::with_id("inner".into(), None, vec![Item::new(1).into()]);
        let outer = Group::with_id("outer".into(), None, vec![inner.into()]);

        let nested = outer.entries()[0].as_group().unwrap();
        let item = nested.items().next().unwrap();
        assert_eq!(item.group().map(GroupId::as_str), Some("inner"));
        assert!(!outer.has_items());
    }

    #[test]
    fn test_group_has_selection() {
        let group = Group::new(None, vec![Item::new(1).into(), Item::new(2).with_selected(true).into()]);
        assert!(group.has_selection());

        let group = Group::new(None, vec![Item::new(1).into()]);
        assert!(!group.has_selection());
    }

    #[test]
    fn test_flat_items_order() {
        let entries = vec![
            Entry::Item(Item::new(1)),
            Group::new(None, vec![Item::new(2).into(), Entry::Separator, Item::new(3).into()]).into(),
            Entry::Separator,
            Entry::Item(Item::new(4)),
        ];

        let ids: Vec<i32> = flat_items(&entries).map(|item| *item.item()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_item_equality_compares_icon_identity() {
        let a = Item::new(1).with_icon(|| "star".to_string());
        let b = a.clone();
        let c = Item::new(1).with_icon(|| "star".to_string());

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.render_icon().as_deref(), Some("star"));
    }

    #[test]
    fn test_item_display() {
        let group = Group::with_id(
            "grp-x".into(),
            None,
            vec![Item::new("apple").with_description("red").into()],
        );
        let item = group.items().next().unwrap();
        assert_eq!(
            item.to_string(),
            "Item(item=apple, disabled=false, selected=false, description=red, group=grp-x)"
        );
        assert_eq!(
            group.to_string(),
            "Group(id=grp-x, entries=[Item(item=apple, disabled=false, selected=false, description=red, group=grp-x)])"
        );
    }
}
