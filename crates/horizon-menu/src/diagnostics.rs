//! Non-fatal diagnostics reported next to a transformation result.
//!
//! Malformed input never makes filtering or selection fail. Instead the
//! affected entries pass through unchanged and a [`Diagnostic`] describing the
//! problem is returned in an [`Outcome`], so callers (and tests) can inspect it.
//! Diagnostics are also logged through `tracing` unless logging was disabled
//! for the [`Entries`](crate::Entries) instance.

use std::fmt;

use horizon_menu_core::logging::targets;

use crate::entry::{Group, GroupId};

/// A problem found while transforming an entry tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A group was found inside another group. The inner group was passed
    /// through without filtering or selecting its children.
    NestedGroup { parent: GroupId, child: GroupId },
    /// `select` was called with data whose id matches no item.
    UnknownSelectionTarget { id: String },
}

impl Diagnostic {
    pub(crate) fn nested_group<T>(parent: &Group<T>, child: &Group<T>) -> Self {
        Self::NestedGroup {
            parent: parent.id().clone(),
            child: child.id().clone(),
        }
    }

    pub(crate) fn log(&self) {
        match self {
            Self::NestedGroup { parent, child } => {
                tracing::warn!(
                    target: targets::ENTRIES,
                    %parent,
                    %child,
                    "nested group detected; nested groups are not supported"
                );
            }
            Self::UnknownSelectionTarget { id } => {
                tracing::debug!(target: targets::SELECTION, %id, "no item with this id, selection unchanged");
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NestedGroup { parent, child } => write!(
                f,
                "Parent group with id {parent} contains nested group with id {child}. Nested groups are not supported!"
            ),
            Self::UnknownSelectionTarget { id } => write!(f, "No item with id '{id}' to select"),
        }
    }
}

/// A value together with the diagnostics produced while computing it.
#[derive(Debug, Clone)]
pub struct Outcome<V> {
    pub value: V,
    pub diagnostics: Vec<Diagnostic>,
}

impl<V> Outcome<V> {
    pub fn new(value: V, diagnostics: Vec<Diagnostic>) -> Self {
        Self { value, diagnostics }
    }

    /// Returns true if no diagnostics were produced.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_value(self) -> V {
        self.value
    }

    pub fn map<U, F: FnOnce(V) -> U>(self, f: F) -> Outcome<U> {
        Outcome {
            value: f(self.value),
            diagnostics: self.diagnostics,
        }
    }
}
