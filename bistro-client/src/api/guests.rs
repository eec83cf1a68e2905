//! Guest API
//!
//! Staff endpoints under `accounts/guests` plus the endpoints a signed-in
//! guest uses at the table.

use shared::cart::Cart;
use shared::error::AppError;
use shared::models::{Guest, GuestCreate, Order, OrderItemInput};
use shared::response::{ApiResponse, DateRange};

use super::into_data;
use crate::ClientResult;
use crate::client::HttpClient;

pub struct GuestApi<'a, C: HttpClient> {
    http: &'a C,
}

impl<'a, C: HttpClient> GuestApi<'a, C> {
    pub fn new(http: &'a C) -> Self {
        Self { http }
    }

    pub async fn list(&self, range: DateRange) -> ClientResult<Vec<Guest>> {
        let resp: ApiResponse<Vec<Guest>> =
            self.http.get_query("accounts/guests", &range).await?;
        into_data(resp, "guests")
    }

    pub async fn create(&self, req: &GuestCreate) -> ClientResult<Guest> {
        let resp: ApiResponse<Guest> = self.http.post("accounts/guests", req).await?;
        into_data(resp, "guest")
    }

    // ---- signed-in guest ----

    /// Orders of the signed-in guest
    pub async fn orders(&self) -> ClientResult<Vec<Order>> {
        let resp: ApiResponse<Vec<Order>> = self.http.get("guest/orders").await?;
        into_data(resp, "guest orders")
    }

    pub async fn place_orders(&self, items: &[OrderItemInput]) -> ClientResult<Vec<Order>> {
        let resp: ApiResponse<Vec<Order>> = self.http.post("guest/orders", &items).await?;
        into_data(resp, "placed orders")
    }

    /// Submit the cart as orders; an empty cart never reaches the backend
    pub async fn submit_cart(&self, cart: &Cart) -> ClientResult<Vec<Order>> {
        if cart.is_empty() {
            return Err(AppError::validation("Cart is empty").into());
        }
        self.place_orders(&cart.to_order_items()).await
    }

    pub async fn call_waiter(&self) -> ClientResult<()> {
        let _resp: ApiResponse<serde_json::Value> =
            self.http.post_empty("guest/call-waiter").await?;
        Ok(())
    }
}
