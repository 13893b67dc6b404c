//! Entries configuration.
//!
//! [`EntriesConfig`] carries the settings that are usually fixed per widget
//! rather than per build: the selection policy, the prefix of generated group
//! ids, and whether diagnostics are logged. It can be loaded from TOML or
//! JSON; missing keys fall back to their defaults.
//!
//! ```
//! use horizon_menu::{EntriesConfig, ItemSelection};
//!
//! let config = EntriesConfig::from_toml_str(r#"
//!     selection = "SINGLE_PER_GROUP"
//!     group_id_prefix = "nav"
//! "#).unwrap();
//!
//! assert_eq!(config.selection, ItemSelection::SinglePerGroup);
//! assert_eq!(config.group_id_prefix, "nav");
//! assert!(config.log_diagnostics);
//! ```

use serde::{Deserialize, Serialize};

use crate::entry::DEFAULT_GROUP_ID_PREFIX;
use crate::error::Result;
use crate::selection::ItemSelection;

/// Settings applied by [`EntriesBuilder::with_config`](crate::EntriesBuilder::with_config).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntriesConfig {
    /// Selection policy of the built entries.
    pub selection: ItemSelection,
    /// Prefix of generated group ids.
    pub group_id_prefix: String,
    /// Whether diagnostics are logged through `tracing`.
    pub log_diagnostics: bool,
}

impl Default for EntriesConfig {
    fn default() -> Self {
        Self {
            selection: ItemSelection::default(),
            group_id_prefix: DEFAULT_GROUP_ID_PREFIX.to_string(),
            log_diagnostics: true,
        }
    }
}

impl EntriesConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}
