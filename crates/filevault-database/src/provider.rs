//! Store backend dispatch.

use std::sync::Arc;

use tracing::info;

use filevault_core::config::AppConfig;
use filevault_core::error::AppError;
use filevault_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::MemoryVersionStore;
use crate::repositories::FileVersionRepository;
use crate::store::VersionStore;

/// Connect the version store backend named by the configuration.
pub async fn connect_store(config: &AppConfig) -> AppResult<Arc<dyn VersionStore>> {
    match config.store.backend.as_str() {
        "postgres" => {
            info!("Initializing PostgreSQL version store");
            let pool = DatabasePool::connect(&config.database).await?;
            Ok(Arc::new(FileVersionRepository::new(
                pool.into_pool(),
                config.store.delete_mode,
            )))
        }
        "memory" => {
            info!("Initializing in-memory version store");
            Ok(Arc::new(MemoryVersionStore::new(config.store.delete_mode)))
        }
        other => Err(AppError::configuration(format!(
            "Unknown store backend: '{other}'. Supported: postgres, memory"
        ))),
    }
}
