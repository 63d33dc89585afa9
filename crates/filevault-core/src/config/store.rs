//! Version store configuration.

use serde::{Deserialize, Serialize};

/// Version store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store backend: `"postgres"` or `"memory"`.
    #[serde(default = "default_backend")]
    pub backend: String,
    /// What `delete` does to the rows of a file.
    #[serde(default)]
    pub delete_mode: DeleteMode,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            delete_mode: DeleteMode::default(),
        }
    }
}

/// Delete behavior for the version store.
///
/// Soft delete flags rows as non-current and keeps them; the name stays
/// reserved. Hard delete removes every row for the name, freeing it for
/// re-creation at version 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeleteMode {
    /// Flag rows as non-current, never remove them.
    #[default]
    Soft,
    /// Physically remove all rows for the name.
    Hard,
}

fn default_backend() -> String {
    "postgres".to_string()
}
