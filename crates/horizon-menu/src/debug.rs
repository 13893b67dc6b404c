//! Debug visualization for entry trees.
//!
//! Use [`EntriesTreeDebug`] to get a readable view of an entry tree:
//!
//! ```
//! use horizon_menu::{build_entries, EntriesTreeDebug, ItemSelection, TreeFormatOptions};
//!
//! let entries = build_entries(|s: &&str| s.to_string(), ItemSelection::Single, |b| {
//!     b.item("home");
//!     b.group(Some("Docs"), |g| {
//!         g.item("guide").item("api");
//!     });
//! });
//!
//! let debug = EntriesTreeDebug::with_options(TreeFormatOptions::minimal());
//! println!("{}", debug.format(&entries));
//! ```

use std::fmt::{self, Write as FmtWrite};

use crate::entries::Entries;
use crate::entry::{Entry, Group, Item};

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Indentation only.
    Compact,
}

/// Configuration for tree debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to show group ids.
    pub show_ids: bool,
    /// Whether to show item flags (selected, disabled, favorite).
    pub show_flags: bool,
    /// Maximum depth to traverse (None for unlimited).
    pub max_depth: Option<usize>,
    /// Indent size for each level.
    pub indent_size: usize,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_ids: true,
            show_flags: true,
            max_depth: None,
            indent_size: 2,
        }
    }
}

impl TreeFormatOptions {
    /// Create options for minimal output.
    pub fn minimal() -> Self {
        Self {
            show_ids: false,
            show_flags: false,
            ..Default::default()
        }
    }
}

/// Debug utility for visualizing entry trees.
#[derive(Debug, Clone, Default)]
pub struct EntriesTreeDebug {
    options: TreeFormatOptions,
}

impl EntriesTreeDebug {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Formats the canonical tree of `entries` with a summary header.
    pub fn format<T: fmt::Display>(&self, entries: &Entries<T>) -> String {
        let all = entries.all();
        let item_count: usize = all
            .iter()
            .map(|entry| match entry {
                Entry::Group(group) => group.items().count(),
                Entry::Item(_) => 1,
                Entry::Separator => 0,
            })
            .sum();

        let mut output = String::new();
        let _ = writeln!(
            output,
            "Entries ({:?}, {} items{}):",
            entries.item_selection(),
            item_count,
            if entries.has_filter() { ", filtered" } else { "" }
        );
        if all.is_empty() {
            output.push_str("  (empty)\n");
        } else {
            output.push_str(&self.format_entries(all));
        }
        output
    }

    /// Formats a list of entries, one line per entry.
    pub fn format_entries<T: fmt::Display>(&self, entries: &[Entry<T>]) -> String {
        let mut output = String::new();
        self.format_level(entries, 0, &mut output);
        output
    }

    fn format_level<T: fmt::Display>(&self, entries: &[Entry<T>], depth: usize, output: &mut String) {
        if self.options.max_depth.is_some_and(|max| depth > max) {
            return;
        }

        let count = entries.len();
        for (i, entry) in entries.iter().enumerate() {
            output.push_str(&self.build_prefix(depth, i + 1 == count));
            match entry {
                Entry::Group(group) => {
                    self.write_group(group, output);
                    self.format_level(group.entries(), depth + 1, output);
                }
                Entry::Item(item) => self.write_item(item, output),
                Entry::Separator => {
                    output.push_str(match self.options.style {
                        TreeStyle::Unicode => "\u{2500}\u{2500}\u{2500}\u{2500}\n",
                        TreeStyle::Ascii | TreeStyle::Compact => "----\n",
                    });
                }
            }
        }
    }

    fn write_group<T>(&self, group: &Group<T>, output: &mut String) {
        match group.title() {
            Some(title) => {
                let _ = write!(output, "{title}");
            }
            None => output.push_str("(untitled)"),
        }
        if self.options.show_ids {
            let _ = write!(output, " [{}]", group.id());
        }
        output.push('\n');
    }

    fn write_item<T: fmt::Display>(&self, item: &Item<T>, output: &mut String) {
        match item.text() {
            Some(text) => {
                let _ = write!(output, "{text}");
            }
            None => {
                let _ = write!(output, "{}", item.item());
            }
        }

        if self.options.show_flags {
            let flags: Vec<&str> = [
                (item.is_selected(), "selected"),
                (item.is_disabled(), "disabled"),
                (item.is_favorite(), "favorite"),
            ]
            .into_iter()
            .filter_map(|(set, name)| set.then_some(name))
            .collect();
            if !flags.is_empty() {
                let _ = write!(output, " ({})", flags.join(", "));
            }
        }
        output.push('\n');
    }

    /// Build the prefix string for a tree node.
    fn build_prefix(&self, depth: usize, is_last: bool) -> String {
        let (branch, corner, last) = match self.options.style {
            TreeStyle::Ascii => ("|", "+-- ", "`-- "),
            TreeStyle::Unicode => ("\u{2502}", "\u{251c}\u{2500}\u{2500} ", "\u{2514}\u{2500}\u{2500} "),
            TreeStyle::Compact => ("", "", ""),
        };

        let mut prefix = String::new();
        for _ in 0..depth {
            prefix.push_str(branch);
            for _ in 0..self.options.indent_size {
                prefix.push(' ');
            }
        }
        prefix.push_str(if is_last { last } else { corner });
        prefix
    }
}
