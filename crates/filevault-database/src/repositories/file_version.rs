//! PostgreSQL file version repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use filevault_core::config::DeleteMode;
use filevault_core::error::{AppError, ErrorKind};
use filevault_core::result::AppResult;
use filevault_entity::file::{FileListing, FileVersion};

use crate::store::VersionStore;

/// PostgreSQL-backed [`VersionStore`].
#[derive(Debug, Clone)]
pub struct FileVersionRepository {
    pool: PgPool,
    delete_mode: DeleteMode,
}

impl FileVersionRepository {
    /// Create a new file version repository.
    pub fn new(pool: PgPool, delete_mode: DeleteMode) -> Self {
        Self { pool, delete_mode }
    }

    /// Whether any row, current or not, exists for `name`.
    async fn name_exists(&self, name: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM file_versions WHERE name = $1)")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check for existing name", e)
            })
    }
}

#[async_trait]
impl VersionStore for FileVersionRepository {
    async fn list(&self) -> AppResult<Vec<FileListing>> {
        sqlx::query_as::<_, FileListing>(
            "SELECT name, version, is_current, created_at FROM file_versions ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))
    }

    async fn find_current(&self, name: &str) -> AppResult<Option<FileVersion>> {
        sqlx::query_as::<_, FileVersion>(
            "SELECT * FROM file_versions WHERE name = $1 AND is_current = TRUE",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find current file", e))
    }

    async fn create(&self, name: &str, data: &[u8]) -> AppResult<FileVersion> {
        // Check-then-insert, no unique constraint. A race between two
        // concurrent creates for the same name is accepted.
        if self.name_exists(name).await? {
            return Err(AppError::conflict(format!(
                "A file named '{name}' already exists"
            )));
        }

        sqlx::query_as::<_, FileVersion>(
            "INSERT INTO file_versions (name, data, version, is_current, created_at) \
             VALUES ($1, $2, 1, TRUE, $3) RETURNING *",
        )
        .bind(name)
        .bind(data)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create file", e))
    }

    async fn upload_version(&self, name: &str, data: &[u8]) -> AppResult<FileVersion> {
        // Supersede and insert inside one transaction; dropping the
        // transaction without commit rolls back on every error path.
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let current = sqlx::query_as::<_, FileVersion>(
            "SELECT * FROM file_versions WHERE name = $1 AND is_current = TRUE",
        )
        .bind(name)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find current file", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("No file named '{name}' was found")))?;

        sqlx::query("UPDATE file_versions SET is_current = FALSE WHERE id = $1")
            .bind(current.id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to supersede current file", e)
            })?;

        let inserted = sqlx::query_as::<_, FileVersion>(
            "INSERT INTO file_versions (name, data, version, is_current, created_at) \
             VALUES ($1, $2, $3, TRUE, $4) RETURNING *",
        )
        .bind(name)
        .bind(data)
        .bind(current.version + 1)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert new version", e))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit new version", e)
        })?;

        Ok(inserted)
    }

    async fn delete(&self, name: &str) -> AppResult<u64> {
        let result = match self.delete_mode {
            DeleteMode::Soft => {
                sqlx::query("UPDATE file_versions SET is_current = FALSE WHERE name = $1 AND is_current = TRUE")
                    .bind(name)
                    .execute(&self.pool)
                    .await
            }
            DeleteMode::Hard => {
                sqlx::query("DELETE FROM file_versions WHERE name = $1")
                    .bind(name)
                    .execute(&self.pool)
                    .await
            }
        }
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete file", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "No file named '{name}' was found"
            )));
        }
        Ok(result.rows_affected())
    }
}
