//! File upload CLI command.

use std::path::PathBuf;

use clap::Args;

use filevault_core::config::AppConfig;
use filevault_core::error::AppError;

use crate::output;

/// Arguments for the upload command
#[derive(Debug, Args)]
pub struct UploadArgs {
    /// Path to the file to upload
    pub file: PathBuf,

    /// Override file name (defaults to the local file name)
    #[arg(short, long)]
    pub name: Option<String>,
}

/// Execute the upload command
pub async fn execute(args: &UploadArgs, config: &AppConfig) -> Result<(), AppError> {
    let (name, data) = super::read_local_file(&args.file, args.name.as_deref()).await?;

    let service = super::open_service(config).await?;
    let created = service.create_file(&name, &data).await?;

    output::print_success(&format!(
        "File '{}' created (id: {}, version: {}, {} bytes)",
        created.name,
        created.id,
        created.version,
        created.data.len()
    ));

    Ok(())
}
