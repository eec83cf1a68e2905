//! Auth API - staff and guest sessions

use shared::client::{
    GuestLoginResponse, LoginRequest, LoginResponse, RefreshTokenRequest, TokenPair,
};
use shared::models::{GuestLoginRequest, Role, TableNumber};
use shared::response::ApiResponse;
use shared::token::RefreshDecision;

use super::into_data;
use crate::client::HttpClient;
use crate::{ClientError, ClientResult};

pub struct AuthApi<'a, C: HttpClient> {
    http: &'a C,
}

impl<'a, C: HttpClient> AuthApi<'a, C> {
    pub fn new(http: &'a C) -> Self {
        Self { http }
    }

    pub async fn login(&self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        let req = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp: ApiResponse<LoginResponse> = self.http.post("auth/login", &req).await?;
        into_data(resp, "login")
    }

    pub async fn logout(&self) -> ClientResult<()> {
        let req = self.refresh_request()?;
        let _resp: ApiResponse<serde_json::Value> = self.http.post("auth/logout", &req).await?;
        Ok(())
    }

    pub async fn refresh_token(&self) -> ClientResult<TokenPair> {
        let req = self.refresh_request()?;
        let resp: ApiResponse<TokenPair> = self.http.post("auth/refresh-token", &req).await?;
        into_data(resp, "refresh token")
    }

    pub async fn guest_login(
        &self,
        name: &str,
        table_number: TableNumber,
        token: &str,
    ) -> ClientResult<GuestLoginResponse> {
        let req = GuestLoginRequest {
            name: name.to_string(),
            table_number,
            token: token.to_string(),
        };
        let resp: ApiResponse<GuestLoginResponse> =
            self.http.post("guest/auth/login", &req).await?;
        into_data(resp, "guest login")
    }

    pub async fn guest_logout(&self) -> ClientResult<()> {
        let req = self.refresh_request()?;
        let _resp: ApiResponse<serde_json::Value> =
            self.http.post("guest/auth/logout", &req).await?;
        Ok(())
    }

    pub async fn guest_refresh_token(&self) -> ClientResult<TokenPair> {
        let req = self.refresh_request()?;
        let resp: ApiResponse<TokenPair> =
            self.http.post("guest/auth/refresh-token", &req).await?;
        into_data(resp, "guest refresh token")
    }

    /// Refresh the session tokens if they are close to expiry
    ///
    /// An expired refresh token ends the session, and so does a refresh call
    /// rejected with 401.
    pub async fn check_and_refresh(&self) -> ClientResult<RefreshDecision> {
        let session = self.http.session();
        let now = chrono::Utc::now().timestamp();
        let decision = session.refresh_decision_at(now);

        match decision {
            RefreshDecision::Fresh => {}
            RefreshDecision::Expired => {
                if session.is_active() {
                    tracing::info!("Refresh token expired, ending session");
                    session.end();
                }
            }
            RefreshDecision::Refresh => {
                let result = match session.role() {
                    Some(Role::Guest) => self.guest_refresh_token().await,
                    _ => self.refresh_token().await,
                };
                match result {
                    Ok(tokens) => session.set_tokens(tokens)?,
                    Err(e) => {
                        if e.is_unauthorized() {
                            session.end();
                        }
                        return Err(e);
                    }
                }
            }
        }
        Ok(decision)
    }

    fn refresh_request(&self) -> ClientResult<RefreshTokenRequest> {
        let refresh_token = self
            .http
            .session()
            .refresh_token()
            .ok_or(ClientError::NoSession)?;
        Ok(RefreshTokenRequest { refresh_token })
    }
}
