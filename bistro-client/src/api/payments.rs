//! Payment API

use shared::models::{Id, Payment, PaymentCreate};
use shared::response::ApiResponse;

use super::into_data;
use crate::ClientResult;
use crate::client::HttpClient;

pub struct PaymentApi<'a, C: HttpClient> {
    http: &'a C,
}

impl<'a, C: HttpClient> PaymentApi<'a, C> {
    pub fn new(http: &'a C) -> Self {
        Self { http }
    }

    pub async fn create(&self, req: &PaymentCreate) -> ClientResult<Payment> {
        let resp: ApiResponse<Payment> = self.http.post("payments", req).await?;
        into_data(resp, "payment")
    }

    pub async fn get(&self, id: Id) -> ClientResult<Payment> {
        let resp: ApiResponse<Payment> = self.http.get(&format!("payments/{}", id)).await?;
        into_data(resp, "payment")
    }
}
