//! Warehouse listing.

use portal_core::result::AppResult;
use portal_core::types::{ApiResponse, WarehouseSummary};

use crate::client::ApiClient;
use crate::endpoints::warehouses;

/// Warehouse endpoints.
#[derive(Debug, Clone)]
pub struct WarehouseService {
    client: ApiClient,
}

impl WarehouseService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Warehouses offered on the registration form.
    pub async fn list_public(&self) -> AppResult<Vec<WarehouseSummary>> {
        let response: ApiResponse<Vec<WarehouseSummary>> =
            self.client.get(warehouses::PUBLIC_LIST).await?;
        Ok(response.data)
    }
}
