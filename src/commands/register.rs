//! `register` command.

use clap::Args;
use tracing::warn;

use portal_client::Portal;
use portal_core::error::AppError;

use crate::output;

/// Arguments for registration
#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Username (will prompt if not provided)
    #[arg(short, long)]
    pub username: Option<String>,
    /// Password (will prompt if not provided)
    #[arg(short, long)]
    pub password: Option<String>,
    /// Warehouse to join (offers a choice if not provided)
    #[arg(short, long)]
    pub warehouse_id: Option<i64>,
}

/// Execute registration
pub async fn execute(args: &RegisterArgs, portal: &Portal) -> Result<(), AppError> {
    let username = match &args.username {
        Some(u) => u.clone(),
        None => super::prompt_text("Username")?,
    };
    let password = match &args.password {
        Some(p) => p.clone(),
        None => dialoguer::Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
    };
    let warehouse_id = match args.warehouse_id {
        Some(id) => Some(id),
        None if args.username.is_none() => choose_warehouse(portal).await?,
        None => None,
    };

    let user = portal
        .register()
        .submit(&username, &password, warehouse_id)
        .await?;

    output::print_success(&format!(
        "Account '{}' created, sign in through the staff portal",
        user.username
    ));
    Ok(())
}

/// Offers the public warehouse list; registration proceeds without one when
/// the list is unavailable.
async fn choose_warehouse(portal: &Portal) -> Result<Option<i64>, AppError> {
    let warehouses = match portal.warehouses().list_public().await {
        Ok(list) => list,
        Err(e) => {
            warn!(error = %e, "Warehouse list unavailable");
            return Ok(None);
        }
    };

    let choices: Vec<_> = warehouses
        .iter()
        .filter_map(|w| w.id.map(|id| (id, w.name.clone())))
        .collect();
    if choices.is_empty() {
        return Ok(None);
    }

    let mut labels = vec!["(none)".to_string()];
    labels.extend(choices.iter().map(|(_, name)| name.clone()));

    let picked = dialoguer::Select::new()
        .with_prompt("Warehouse")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

    Ok(picked
        .checked_sub(1)
        .and_then(|i| choices.get(i))
        .map(|(id, _)| *id))
}
