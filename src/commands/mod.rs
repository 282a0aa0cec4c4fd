//! CLI command definitions and dispatch.

pub mod guard;
pub mod login;
pub mod logout;
pub mod profile;
pub mod register;
pub mod status;
pub mod warehouses;

use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};

use portal_client::Portal;
use portal_core::config::AppConfig;
use portal_core::error::AppError;
use portal_core::types::Role;

use crate::navigator::TerminalNavigator;
use crate::output::OutputFormat;

/// Gudang Portal: sign in to the warehouse admin and staff portals
#[derive(Debug, Parser)]
#[command(name = "gudang-portal", version, about, long_about = None)]
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
    /// Sign in through a portal
    Login(login::LoginArgs),
    /// Register a staff account
    Register(register::RegisterArgs),
    /// Sign out and clear the stored session
    Logout(logout::LogoutArgs),
    /// Show the stored session
    Status,
    /// Check whether a page may be opened
    Guard(guard::GuardArgs),
    /// Show or update your profile
    Profile(profile::ProfileArgs),
    /// List warehouses open for registration
    Warehouses,
}

/// Portal selector on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PortalArg {
    Admin,
    Staff,
}

impl From<PortalArg> for Role {
    fn from(arg: PortalArg) -> Self {
        match arg {
            PortalArg::Admin => Role::Admin,
            PortalArg::Staff => Role::Staff,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        let portal = open_portal(config)?;

        match &self.command {
            Commands::Login(args) => login::execute(args, &portal).await,
            Commands::Register(args) => register::execute(args, &portal).await,
            Commands::Logout(args) => logout::execute(args, &portal).await,
            Commands::Status => status::execute(&portal, self.format).await,
            Commands::Guard(args) => guard::execute(args, &portal, self.format).await,
            Commands::Profile(args) => profile::execute(args, &portal, self.format).await,
            Commands::Warehouses => warehouses::execute(&portal, self.format).await,
        }
    }
}

/// Helper: wire the portal over the configured store
fn open_portal(config: AppConfig) -> Result<Portal, AppError> {
    Portal::from_config(config, Arc::new(TerminalNavigator))
}

/// Helper: text prompt
pub fn prompt_text(prompt: &str) -> Result<String, AppError> {
    dialoguer::Input::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(|e| AppError::internal(format!("Input error: {e}")))
}

/// Helper: hidden prompt
pub fn prompt_password(prompt: &str) -> Result<String, AppError> {
    dialoguer::Password::new()
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {e}")))
}
