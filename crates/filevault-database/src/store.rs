//! The version store trait implemented by every backend.

use async_trait::async_trait;

use filevault_core::result::AppResult;
use filevault_entity::file::{FileListing, FileVersion};

/// Storage for versioned named files.
///
/// Both backends give the five operations identical semantics; services
/// depend on `Arc<dyn VersionStore>` and never on a concrete backend.
///
/// Invariants maintained by implementations:
/// - at most one row per `name` has `is_current = true`;
/// - `version` values per `name` are contiguous and start at 1.
#[async_trait]
pub trait VersionStore: Send + Sync + 'static {
    /// List every stored row, superseded and soft-deleted versions
    /// included, without payloads, in insertion order.
    async fn list(&self) -> AppResult<Vec<FileListing>>;

    /// Find the current version of `name`, if any.
    async fn find_current(&self, name: &str) -> AppResult<Option<FileVersion>>;

    /// Store a new file at version 1.
    ///
    /// Fails with a `Conflict` error if any row, current or not, already
    /// exists for `name`. The check is check-then-insert without a unique
    /// constraint; concurrent creates for the same name can race.
    async fn create(&self, name: &str, data: &[u8]) -> AppResult<FileVersion>;

    /// Store a new version of an existing file.
    ///
    /// Atomically flips the current row of `name` to non-current and
    /// inserts a row with the next version number. Fails with a `NotFound`
    /// error if `name` has no current row; on any failure no partial state
    /// is visible.
    async fn upload_version(&self, name: &str, data: &[u8]) -> AppResult<FileVersion>;

    /// Delete a file by name, per the configured delete mode.
    ///
    /// Soft mode flags the current rows non-current; hard mode removes
    /// every row for the name. Fails with a `NotFound` error when nothing
    /// matches. Returns the number of affected rows.
    async fn delete(&self, name: &str) -> AppResult<u64>;
}
