//! CLI command definitions and dispatch.

pub mod delete;
pub mod get;
pub mod init;
pub mod list;
pub mod update;
pub mod upload;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use filevault_core::config::{AppConfig, LoggingConfig};
use filevault_core::error::AppError;
use filevault_service::FileService;

use crate::output::OutputFormat;

/// FileVault versioned file storage
#[derive(Debug, Parser)]
#[command(name = "filevault", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List all stored file versions (metadata only)
    List(list::ListArgs),
    /// Fetch the current version of a file
    Get(get::GetArgs),
    /// Upload a new file
    Upload(upload::UploadArgs),
    /// Upload a new version of an existing file
    Update(update::UpdateArgs),
    /// Delete a file by name
    Delete(delete::DeleteArgs),
    /// Create the file_versions table if it does not exist
    Init(init::InitArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load(&self.config)?;
        init_logging(&config.logging);

        match &self.command {
            Commands::List(args) => list::execute(args, &config, self.format).await,
            Commands::Get(args) => get::execute(args, &config).await,
            Commands::Upload(args) => upload::execute(args, &config).await,
            Commands::Update(args) => update::execute(args, &config).await,
            Commands::Delete(args) => delete::execute(args, &config).await,
            Commands::Init(args) => init::execute(args, &config).await,
        }
    }
}

/// Initialize tracing from config, letting `RUST_LOG` take precedence.
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    }
}

/// Helper: connect the configured store and wrap it in a file service.
pub async fn open_service(config: &AppConfig) -> Result<FileService, AppError> {
    let store = filevault_database::connect_store(config).await?;
    Ok(FileService::new(store))
}

/// Helper: read a local file and resolve the name to store it under.
pub async fn read_local_file(
    path: &std::path::Path,
    name_override: Option<&str>,
) -> Result<(String, Vec<u8>), AppError> {
    let name = match name_override {
        Some(name) => name.to_string(),
        None => path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| {
                AppError::validation(format!("Cannot derive a file name from {}", path.display()))
            })?,
    };

    let data = tokio::fs::read(path)
        .await
        .map_err(|e| AppError::storage(format!("Failed to read {}: {e}", path.display())))?;

    Ok((name, data))
}
