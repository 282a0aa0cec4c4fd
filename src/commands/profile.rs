//! `profile` commands.

use clap::{Args, Subcommand};

use portal_client::Portal;
use portal_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for profile commands
#[derive(Debug, Args)]
pub struct ProfileArgs {
    /// Profile subcommand
    #[command(subcommand)]
    pub command: ProfileCommand,
}

/// Profile subcommands
#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    /// Show your profile
    Show,
    /// Change your password
    Update {
        /// New password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
}

/// Execute profile commands
pub async fn execute(args: &ProfileArgs, portal: &Portal, format: OutputFormat) -> Result<(), AppError> {
    let service = portal.profile();

    match &args.command {
        ProfileCommand::Show => {
            let profile = service.get_me().await?;
            match format {
                OutputFormat::Json => output::print_json(&profile),
                OutputFormat::Table => {
                    output::print_kv("Username", &profile.username);
                    output::print_kv("Role", &profile.role_display());
                    if let Some(warehouse) = &profile.warehouse {
                        output::print_kv("Warehouse", &warehouse.name);
                        if let Some(location) = &warehouse.location {
                            output::print_kv("Location", location);
                        }
                    }
                }
            }
        }
        ProfileCommand::Update { password } => {
            let (password, confirm) = match password {
                Some(p) => (p.clone(), p.clone()),
                None => (
                    super::prompt_password("New password (empty keeps the current one)")?,
                    super::prompt_password("Confirm password")?,
                ),
            };
            let message = service.change_password(&password, &confirm).await?;
            output::print_success(&message);
        }
    }
    Ok(())
}
