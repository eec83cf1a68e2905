//! Account API - employee management and own profile

use shared::models::{
    Account, AccountCreate, AccountUpdate, ChangePassword, Id, ProfileUpdate,
};
use shared::response::ApiResponse;

use super::into_data;
use crate::ClientResult;
use crate::client::HttpClient;

pub struct AccountApi<'a, C: HttpClient> {
    http: &'a C,
}

impl<'a, C: HttpClient> AccountApi<'a, C> {
    pub fn new(http: &'a C) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> ClientResult<Vec<Account>> {
        let resp: ApiResponse<Vec<Account>> = self.http.get("accounts").await?;
        into_data(resp, "accounts")
    }

    pub async fn get(&self, id: Id) -> ClientResult<Account> {
        let resp: ApiResponse<Account> = self.http.get(&format!("accounts/{}", id)).await?;
        into_data(resp, "account")
    }

    pub async fn create(&self, req: &AccountCreate) -> ClientResult<Account> {
        let resp: ApiResponse<Account> = self.http.post("accounts", req).await?;
        into_data(resp, "account")
    }

    pub async fn update(&self, id: Id, req: &AccountUpdate) -> ClientResult<Account> {
        let resp: ApiResponse<Account> = self.http.put(&format!("accounts/{}", id), req).await?;
        into_data(resp, "account")
    }

    pub async fn delete(&self, id: Id) -> ClientResult<Account> {
        let resp: ApiResponse<Account> = self.http.delete(&format!("accounts/{}", id)).await?;
        into_data(resp, "account")
    }

    // ---- own profile ----

    pub async fn me(&self) -> ClientResult<Account> {
        let resp: ApiResponse<Account> = self.http.get("accounts/me").await?;
        into_data(resp, "profile")
    }

    pub async fn update_me(&self, req: &ProfileUpdate) -> ClientResult<Account> {
        let resp: ApiResponse<Account> = self.http.put("accounts/me", req).await?;
        into_data(resp, "profile")
    }

    pub async fn change_password(&self, req: &ChangePassword) -> ClientResult<Account> {
        let resp: ApiResponse<Account> = self.http.put("accounts/change-password", req).await?;
        into_data(resp, "profile")
    }
}
