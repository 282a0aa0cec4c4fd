//! `guard` command.

use clap::Args;
use serde::Serialize;

use portal_auth::GuardDecision;
use portal_client::Portal;
use portal_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for guard
#[derive(Debug, Args)]
pub struct GuardArgs {
    /// Page path, e.g. /admin/users
    pub path: String,
}

#[derive(Debug, Serialize)]
struct GuardReport<'a> {
    path: &'a str,
    allowed: bool,
    redirect: Option<&'a str>,
}

/// Execute guard
pub async fn execute(args: &GuardArgs, portal: &Portal, format: OutputFormat) -> Result<(), AppError> {
    let decision = portal.guard().check(&args.path).await;

    match format {
        OutputFormat::Json => output::print_json(&GuardReport {
            path: &args.path,
            allowed: decision == GuardDecision::Allow,
            redirect: decision.redirect_target(),
        }),
        OutputFormat::Table => match &decision {
            GuardDecision::Allow => output::print_success(&format!("{} may be opened", args.path)),
            GuardDecision::Redirect(to) => {
                output::print_warning(&format!("{} redirects to {to}", args.path))
            }
        },
    }
    Ok(())
}
