//! In-memory version store implementation.

use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use filevault_core::config::DeleteMode;
use filevault_core::error::AppError;
use filevault_core::result::AppResult;
use filevault_entity::file::{FileListing, FileVersion};

use crate::store::VersionStore;

/// In-memory [`VersionStore`] for single-node use and tests.
///
/// Rows live in one locked vector; every mutation holds the write lock for
/// its whole duration, which stands in for the database transaction in
/// `upload_version`.
#[derive(Debug, Default)]
pub struct MemoryVersionStore {
    rows: RwLock<Vec<FileVersion>>,
    next_id: AtomicI64,
    delete_mode: DeleteMode,
}

impl MemoryVersionStore {
    /// Create an empty store with the given delete mode.
    pub fn new(delete_mode: DeleteMode) -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(0),
            delete_mode,
        }
    }

    fn allocate_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[async_trait]
impl VersionStore for MemoryVersionStore {
    async fn list(&self) -> AppResult<Vec<FileListing>> {
        let rows = self.rows.read().expect("store lock poisoned");
        Ok(rows.iter().map(FileVersion::listing).collect())
    }

    async fn find_current(&self, name: &str) -> AppResult<Option<FileVersion>> {
        let rows = self.rows.read().expect("store lock poisoned");
        Ok(rows.iter().find(|r| r.is_current && r.name == name).cloned())
    }

    async fn create(&self, name: &str, data: &[u8]) -> AppResult<FileVersion> {
        let mut rows = self.rows.write().expect("store lock poisoned");
        if rows.iter().any(|r| r.name == name) {
            return Err(AppError::conflict(format!(
                "A file named '{name}' already exists"
            )));
        }

        let row = FileVersion {
            id: self.allocate_id(),
            name: name.to_string(),
            data: data.to_vec(),
            version: 1,
            is_current: true,
            created_at: Utc::now(),
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn upload_version(&self, name: &str, data: &[u8]) -> AppResult<FileVersion> {
        let mut rows = self.rows.write().expect("store lock poisoned");
        let current = rows
            .iter_mut()
            .find(|r| r.is_current && r.name == name)
            .ok_or_else(|| AppError::not_found(format!("No file named '{name}' was found")))?;

        current.is_current = false;
        let next_version = current.version + 1;

        let row = FileVersion {
            id: self.allocate_id(),
            name: name.to_string(),
            data: data.to_vec(),
            version: next_version,
            is_current: true,
            created_at: Utc::now(),
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn delete(&self, name: &str) -> AppResult<u64> {
        let mut rows = self.rows.write().expect("store lock poisoned");
        let affected = match self.delete_mode {
            DeleteMode::Soft => {
                let mut affected = 0u64;
                for row in rows.iter_mut().filter(|r| r.is_current && r.name == name) {
                    row.is_current = false;
                    affected += 1;
                }
                affected
            }
            DeleteMode::Hard => {
                let before = rows.len();
                rows.retain(|r| r.name != name);
                (before - rows.len()) as u64
            }
        };

        if affected == 0 {
            return Err(AppError::not_found(format!(
                "No file named '{name}' was found"
            )));
        }
        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filevault_core::error::ErrorKind;

    #[tokio::test]
    async fn test_create_assigns_monotonic_ids() {
        let store = MemoryVersionStore::new(DeleteMode::Soft);
        let a = store.create("a.bin", &[1]).await.unwrap();
        let b = store.create("b.bin", &[2]).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn test_upload_version_leaves_prior_data_untouched() {
        let store = MemoryVersionStore::new(DeleteMode::Soft);
        store.create("a.bin", &[1, 2, 3]).await.unwrap();
        store.upload_version("a.bin", &[4, 5]).await.unwrap();

        let rows = store.rows.read().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].data, vec![1, 2, 3]);
        assert!(!rows[0].is_current);
        assert_eq!(rows[1].data, vec![4, 5]);
        assert!(rows[1].is_current);
    }

    #[tokio::test]
    async fn test_soft_delete_keeps_rows() {
        let store = MemoryVersionStore::new(DeleteMode::Soft);
        store.create("a.bin", &[1]).await.unwrap();
        let affected = store.delete("a.bin").await.unwrap();
        assert_eq!(affected, 1);
        assert_eq!(store.rows.read().unwrap().len(), 1);
        assert!(store.find_current("a.bin").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_hard_delete_frees_the_name() {
        let store = MemoryVersionStore::new(DeleteMode::Hard);
        store.create("a.bin", &[1]).await.unwrap();
        store.upload_version("a.bin", &[2]).await.unwrap();
        let affected = store.delete("a.bin").await.unwrap();
        assert_eq!(affected, 2);
        assert!(store.rows.read().unwrap().is_empty());

        let recreated = store.create("a.bin", &[3]).await.unwrap();
        assert_eq!(recreated.version, 1);
    }

    #[tokio::test]
    async fn test_soft_deleted_name_stays_reserved() {
        let store = MemoryVersionStore::new(DeleteMode::Soft);
        store.create("a.bin", &[1]).await.unwrap();
        store.delete("a.bin").await.unwrap();
        let err = store.create("a.bin", &[2]).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }
}
