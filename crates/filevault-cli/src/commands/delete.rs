//! File delete CLI command.

use clap::Args;
use dialoguer::Confirm;

use filevault_core::config::AppConfig;
use filevault_core::error::AppError;

use crate::output;

/// Arguments for the delete command
#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Name of the file to delete
    pub name: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Execute the delete command
pub async fn execute(args: &DeleteArgs, config: &AppConfig) -> Result<(), AppError> {
    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete file '{}'?", args.name))
            .default(false)
            .interact()
            .map_err(|e| AppError::internal(format!("Prompt failed: {e}")))?;
        if !confirmed {
            output::print_warning("Aborted.");
            return Ok(());
        }
    }

    let service = super::open_service(config).await?;
    let affected = service.delete_file(&args.name).await?;

    output::print_success(&format!(
        "File '{}' deleted ({} version(s) affected)",
        args.name, affected
    ));

    Ok(())
}
