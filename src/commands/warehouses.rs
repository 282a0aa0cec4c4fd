//! `warehouses` command.

use serde::Serialize;
use tabled::Tabled;

use portal_client::Portal;
use portal_core::error::AppError;
use portal_core::types::WarehouseSummary;

use crate::output::{self, OutputFormat};

#[derive(Debug, Serialize, Tabled)]
struct WarehouseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Location")]
    location: String,
}

impl From<WarehouseSummary> for WarehouseRow {
    fn from(w: WarehouseSummary) -> Self {
        Self {
            id: w.id.map(|id| id.to_string()).unwrap_or_default(),
            name: w.name,
            location: w.location.unwrap_or_default(),
        }
    }
}

/// Execute warehouses
pub async fn execute(portal: &Portal, format: OutputFormat) -> Result<(), AppError> {
    let warehouses = portal.warehouses().list_public().await?;
    match format {
        OutputFormat::Json => output::print_json(&warehouses),
        OutputFormat::Table => {
            let rows: Vec<WarehouseRow> = warehouses.into_iter().map(Into::into).collect();
            output::print_list(&rows, format);
        }
    }
    Ok(())
}
