//! File update CLI command.

use std::path::PathBuf;

use clap::Args;

use filevault_core::config::AppConfig;
use filevault_core::error::AppError;

use crate::output;

/// Arguments for the update command
#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Path to the new version's content
    pub file: PathBuf,

    /// Override file name (defaults to the local file name)
    #[arg(short, long)]
    pub name: Option<String>,
}

/// Execute the update command
pub async fn execute(args: &UpdateArgs, config: &AppConfig) -> Result<(), AppError> {
    let (name, data) = super::read_local_file(&args.file, args.name.as_deref()).await?;

    let service = super::open_service(config).await?;
    let uploaded = service.update_file(&name, &data).await?;

    output::print_success(&format!(
        "File '{}' updated to version {} ({} bytes)",
        uploaded.name,
        uploaded.version,
        uploaded.data.len()
    ));

    Ok(())
}
