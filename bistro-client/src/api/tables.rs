use shared::models::{DiningTable, DiningTableCreate, DiningTableUpdate, TableNumber};
use shared::response::ApiResponse;

use super::into_data;
use crate::ClientResult;
use crate::client::HttpClient;

pub struct TableApi<'a, C: HttpClient> {
    http: &'a C,
}

impl<'a, C: HttpClient> TableApi<'a, C> {
    pub fn new(http: &'a C) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> ClientResult<Vec<DiningTable>> {
        let resp: ApiResponse<Vec<DiningTable>> = self.http.get("tables").await?;
        into_data(resp, "tables")
    }

    pub async fn get(&self, number: TableNumber) -> ClientResult<DiningTable> {
        let resp: ApiResponse<DiningTable> = self.http.get(&format!("tables/{}", number)).await?;
        into_data(resp, "table")
    }

    pub async fn create(&self, req: &DiningTableCreate) -> ClientResult<DiningTable> {
        let resp: ApiResponse<DiningTable> = self.http.post("tables", req).await?;
        into_data(resp, "table")
    }

    /// Update a table; `change_token` rotates its QR login token
    pub async fn update(
        &self,
        number: TableNumber,
        req: &DiningTableUpdate,
    ) -> ClientResult<DiningTable> {
        let resp: ApiResponse<DiningTable> =
            self.http.put(&format!("tables/{}", number), req).await?;
        into_data(resp, "table")
    }

    pub async fn delete(&self, number: TableNumber) -> ClientResult<DiningTable> {
        let resp: ApiResponse<DiningTable> =
            self.http.delete(&format!("tables/{}", number)).await?;
        into_data(resp, "table")
    }
}
