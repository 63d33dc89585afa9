//! Schema bootstrap CLI command.

use clap::Args;

use filevault_core::config::AppConfig;
use filevault_core::error::AppError;
use filevault_database::{DatabasePool, schema};

use crate::output;

/// Arguments for the init command
#[derive(Debug, Args)]
pub struct InitArgs {}

/// Execute the init command
pub async fn execute(_args: &InitArgs, config: &AppConfig) -> Result<(), AppError> {
    if config.store.backend != "postgres" {
        output::print_warning("The configured store backend needs no schema; nothing to do.");
        return Ok(());
    }

    let pool = DatabasePool::connect(&config.database).await?;
    schema::ensure_schema(pool.pool()).await?;
    pool.close().await;

    output::print_success("file_versions schema is in place");
    Ok(())
}
