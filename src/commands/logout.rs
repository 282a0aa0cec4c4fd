//! `logout` command.

use clap::Args;

use portal_client::Portal;
use portal_core::error::AppError;
use portal_core::types::Role;

use super::PortalArg;
use crate::output;

/// Arguments for logout
#[derive(Debug, Args)]
pub struct LogoutArgs {
    /// Portal to return to (defaults to the signed-in role's portal)
    #[arg(long, value_enum)]
    pub portal: Option<PortalArg>,
}

/// Execute logout
pub async fn execute(args: &LogoutArgs, portal: &Portal) -> Result<(), AppError> {
    let target = match args.portal {
        Some(p) => Role::from(p),
        None => portal.oracle().role().await.unwrap_or(Role::Staff),
    };

    portal.logout().submit(target).await;
    output::print_success("Signed out");
    Ok(())
}
