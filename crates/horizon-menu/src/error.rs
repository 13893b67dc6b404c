//! Error types for the entry model.
//!
//! Filtering and selection never fail; these errors come from loading
//! configuration and from the opt-in [`Entries::validate`](crate::Entries::validate).

use crate::entry::GroupId;

/// Result type alias for entry model operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the entry model.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// TOML configuration could not be parsed.
    #[error("Invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration could not be written as TOML.
    #[error("Failed to serialize configuration as TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON configuration could not be parsed.
    #[error("Invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// Two items share the same id.
    #[error("Duplicate item id '{id}'")]
    DuplicateItemId { id: String },

    /// A group contains another group.
    #[error("Group '{parent}' contains nested group '{child}'; nested groups are not supported")]
    NestedGroup { parent: GroupId, child: GroupId },
}
