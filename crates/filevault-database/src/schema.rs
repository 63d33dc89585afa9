//! Schema bootstrap for the `file_versions` table.

use sqlx::PgPool;
use tracing::info;

use filevault_core::error::{AppError, ErrorKind};

/// The `file_versions` table.
///
/// The name index is deliberately non-unique: uniqueness of active names is
/// application-enforced, and soft delete keeps superseded rows around.
const CREATE_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS file_versions (
    id          BIGSERIAL PRIMARY KEY,
    name        TEXT NOT NULL,
    data        BYTEA NOT NULL,
    version     INTEGER NOT NULL,
    is_current  BOOLEAN NOT NULL,
    created_at  TIMESTAMPTZ NOT NULL
)";

const CREATE_NAME_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS file_versions_name_idx ON file_versions (name)";

/// Create the `file_versions` table and its index if they do not exist.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(CREATE_TABLE)
        .execute(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to create file_versions table: {e}"),
                e,
            )
        })?;

    sqlx::query(CREATE_NAME_INDEX)
        .execute(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to create name index: {e}"),
                e,
            )
        })?;

    info!("file_versions schema is in place");
    Ok(())
}
