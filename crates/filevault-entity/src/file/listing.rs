//! Metadata-only listing record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A payload-free view of a stored file version.
///
/// Returned by the list operation, which covers every row (superseded and
/// soft-deleted versions included) without ever carrying binary data.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FileListing {
    /// Logical file name.
    pub name: String,
    /// Sequential version number.
    pub version: i32,
    /// Whether this row is the active version of its name.
    pub is_current: bool,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
}
