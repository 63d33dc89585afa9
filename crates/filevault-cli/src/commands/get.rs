//! File fetch CLI command.

use std::path::PathBuf;

use clap::Args;

use filevault_core::config::AppConfig;
use filevault_core::error::AppError;

use crate::output;

/// Arguments for the get command
#[derive(Debug, Args)]
pub struct GetArgs {
    /// Name of the file to fetch
    pub name: String,

    /// Where to write the payload (defaults to the file name in the
    /// current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the get command
pub async fn execute(args: &GetArgs, config: &AppConfig) -> Result<(), AppError> {
    let service = super::open_service(config).await?;
    let file = service.get_by_name(&args.name).await?;

    let target = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&file.name));
    tokio::fs::write(&target, &file.data).await?;

    output::print_success(&format!(
        "Fetched '{}' ({} bytes) to {}",
        file.name,
        file.data.len(),
        target.display()
    ));
    output::print_kv("version", &file.version.to_string());
    output::print_kv("created", &file.created_at.to_rfc3339());

    Ok(())
}
