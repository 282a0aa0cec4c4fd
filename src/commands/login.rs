//! `login` command.

use clap::Args;

use portal_client::Portal;
use portal_core::error::AppError;

use super::PortalArg;
use crate::output;

/// Arguments for login
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Portal whose login form to use
    #[arg(long, value_enum, default_value = "staff")]
    pub portal: PortalArg,
    /// Username (will prompt if not provided)
    #[arg(short, long)]
    pub username: Option<String>,
    /// Password (will prompt if not provided)
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Execute login
pub async fn execute(args: &LoginArgs, portal: &Portal) -> Result<(), AppError> {
    let username = match &args.username {
        Some(u) => u.clone(),
        None => super::prompt_text("Username")?,
    };
    let password = match &args.password {
        Some(p) => p.clone(),
        None => super::prompt_password("Password")?,
    };

    let outcome = portal
        .login(args.portal.into())
        .submit(&username, &password)
        .await?;

    output::print_success(&format!(
        "Signed in as {} ({})",
        outcome.user.username, outcome.user.role
    ));
    Ok(())
}
