//! File version entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::file::listing::FileListing;

/// One stored version of a named file.
///
/// Every upload produces a new row; the row with `is_current = true` is the
/// one clients retrieve by name. At most one row per `name` is current.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FileVersion {
    /// Surrogate key, assigned by storage, monotonically increasing.
    pub id: i64,
    /// Logical file name, stable across versions.
    pub name: String,
    /// Binary payload.
    pub data: Vec<u8>,
    /// Sequential version number, starting at 1.
    pub version: i32,
    /// Whether this row is the active version of its name.
    pub is_current: bool,
    /// When this row was created.
    pub created_at: DateTime<Utc>,
}

impl FileVersion {
    /// Project this row to its payload-free listing record.
    pub fn listing(&self) -> FileListing {
        FileListing {
            name: self.name.clone(),
            version: self.version,
            is_current: self.is_current,
            created_at: self.created_at,
        }
    }
}
