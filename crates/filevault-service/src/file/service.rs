//! Core file operations: list, get, create, update, delete.

use std::sync::Arc;

use tracing::info;

use filevault_core::error::AppError;
use filevault_core::result::AppResult;
use filevault_database::store::VersionStore;
use filevault_entity::file::{FileListing, FileVersion};

/// Handles the public file operations over a version store.
#[derive(Clone)]
pub struct FileService {
    store: Arc<dyn VersionStore>,
}

impl FileService {
    /// Creates a new file service.
    pub fn new(store: Arc<dyn VersionStore>) -> Self {
        Self { store }
    }

    /// Lists metadata for every stored row, older versions and deleted
    /// files included, without binary data.
    pub async fn list_files(&self) -> AppResult<Vec<FileListing>> {
        self.store.list().await
    }

    /// Gets the current version of a file by name, payload included.
    pub async fn get_by_name(&self, name: &str) -> AppResult<FileVersion> {
        let name = validate_name(name)?;
        self.store
            .find_current(name)
            .await?
            .ok_or_else(|| AppError::not_found(format!("No file named '{name}' was found")))
    }

    /// Creates a new file at version 1.
    pub async fn create_file(&self, name: &str, data: &[u8]) -> AppResult<FileVersion> {
        let name = validate_name(name)?;
        let created = self.store.create(name, data).await?;
        info!(name = %name, id = created.id, size = data.len(), "File created");
        Ok(created)
    }

    /// Uploads a new version of an existing file, superseding the current one.
    pub async fn update_file(&self, name: &str, data: &[u8]) -> AppResult<FileVersion> {
        let name = validate_name(name)?;
        let uploaded = self.store.upload_version(name, data).await?;
        info!(
            name = %name,
            version = uploaded.version,
            size = data.len(),
            "File version uploaded"
        );
        Ok(uploaded)
    }

    /// Deletes a file by name. Returns the number of affected rows.
    pub async fn delete_file(&self, name: &str) -> AppResult<u64> {
        let name = validate_name(name)?;
        let affected = self.store.delete(name).await?;
        info!(name = %name, rows = affected, "File deleted");
        Ok(affected)
    }
}

/// File names are bare names without a path.
fn validate_name(name: &str) -> AppResult<&str> {
    if name.is_empty() {
        return Err(AppError::validation("File name cannot be empty"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(AppError::validation(
            "File name must not contain path separators",
        ));
    }
    Ok(name)
}
