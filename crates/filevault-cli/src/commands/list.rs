//! File listing CLI command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use filevault_core::config::AppConfig;
use filevault_core::error::AppError;
use filevault_entity::file::FileListing;

use crate::output::{self, OutputFormat};

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {}

/// One table row of the listing.
#[derive(Debug, Serialize, Tabled)]
struct ListingRow {
    name: String,
    version: i32,
    current: bool,
    created: String,
}

impl From<&FileListing> for ListingRow {
    fn from(listing: &FileListing) -> Self {
        Self {
            name: listing.name.clone(),
            version: listing.version,
            current: listing.is_current,
            created: listing.created_at.to_rfc3339(),
        }
    }
}

/// Execute the list command
pub async fn execute(
    _args: &ListArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let service = super::open_service(config).await?;
    let listings = service.list_files().await?;

    let rows: Vec<ListingRow> = listings.iter().map(ListingRow::from).collect();
    output::print_list(&rows, format);

    Ok(())
}
