//! Order API - staff side of the order lifecycle

use shared::models::{CreateOrders, GuestId, Id, Order, PayGuestOrders, UpdateOrder};
use shared::response::{ApiResponse, DateRange};

use super::into_data;
use crate::ClientResult;
use crate::client::HttpClient;

pub struct OrderApi<'a, C: HttpClient> {
    http: &'a C,
}

impl<'a, C: HttpClient> OrderApi<'a, C> {
    pub fn new(http: &'a C) -> Self {
        Self { http }
    }

    /// Orders created within `range`
    pub async fn list(&self, range: DateRange) -> ClientResult<Vec<Order>> {
        let resp: ApiResponse<Vec<Order>> = self.http.get_query("orders", &range).await?;
        into_data(resp, "orders")
    }

    pub async fn get(&self, id: Id) -> ClientResult<Order> {
        let resp: ApiResponse<Order> = self.http.get(&format!("orders/{}", id)).await?;
        into_data(resp, "order")
    }

    /// Place orders on behalf of a guest (existing or new)
    pub async fn create(&self, req: &CreateOrders) -> ClientResult<Vec<Order>> {
        let resp: ApiResponse<Vec<Order>> = self.http.post("orders", req).await?;
        into_data(resp, "created orders")
    }

    pub async fn update(&self, id: Id, req: &UpdateOrder) -> ClientResult<Order> {
        let resp: ApiResponse<Order> = self.http.put(&format!("orders/{}", id), req).await?;
        into_data(resp, "updated order")
    }

    /// Mark every delivered order of a guest as paid
    pub async fn pay(&self, guest_id: GuestId) -> ClientResult<Vec<Order>> {
        let req = PayGuestOrders { guest_id };
        let resp: ApiResponse<Vec<Order>> = self.http.post("orders/pay", &req).await?;
        into_data(resp, "paid orders")
    }
}
