//! Resource APIs
//!
//! Thin typed wrappers over [`HttpClient`]. Each wrapper borrows the
//! transport, so the same client (and its session) serves every resource.

mod accounts;
mod auth;
mod catalog;
mod guests;
mod indicators;
mod orders;
mod payments;
mod tables;

pub use accounts::AccountApi;
pub use auth::AuthApi;
pub use catalog::{CategoryApi, DishApi, IngredientApi, MenuApi};
pub use guests::GuestApi;
pub use indicators::IndicatorApi;
pub use orders::OrderApi;
pub use payments::PaymentApi;
pub use tables::TableApi;

use shared::response::ApiResponse;

use crate::client::{HttpClient, NetworkHttpClient};
use crate::realtime::EventChannel;
use crate::session::Session;
use crate::{ClientConfig, ClientError, ClientResult};

/// Unwrap the `data` of a response envelope
pub(crate) fn into_data<T>(response: ApiResponse<T>, what: &str) -> ClientResult<T> {
    response
        .data
        .ok_or_else(|| ClientError::InvalidResponse(format!("Missing {} data", what)))
}

/// Backend client bundling transport, session and realtime channel
///
/// ```no_run
/// use bistro_client::{BistroClient, ClientConfig, DateRange, Session};
///
/// # async fn example() -> Result<(), bistro_client::ClientError> {
/// let config = ClientConfig::new("http://localhost:4000");
/// let client = BistroClient::new(&config, Session::in_memory())?;
/// client.login("owner@bistro.example", "secret").await?;
/// let orders = client.orders().list(DateRange::today()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BistroClient {
    http: NetworkHttpClient,
    events: EventChannel,
}

impl BistroClient {
    pub fn new(config: &ClientConfig, session: Session) -> ClientResult<Self> {
        let http = NetworkHttpClient::new(config, session)?;
        let events = EventChannel::new(config.event_capacity);
        Ok(Self { http, events })
    }

    pub fn http(&self) -> &NetworkHttpClient {
        &self.http
    }

    pub fn session(&self) -> &Session {
        self.http.session()
    }

    /// Realtime channel of the current session
    pub fn events(&self) -> &EventChannel {
        &self.events
    }

    /// Staff login; starts the session and opens the realtime channel
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> ClientResult<shared::models::Account> {
        let response = self.auth().login(email, password).await?;
        self.session().start(response.tokens())?;
        self.events.open();
        Ok(response.account)
    }

    /// Guest login from a table QR code
    pub async fn guest_login(
        &self,
        name: &str,
        table_number: shared::models::TableNumber,
        token: &str,
    ) -> ClientResult<shared::models::Guest> {
        let response = self.auth().guest_login(name, table_number, token).await?;
        self.session().start(response.tokens())?;
        self.session().set_table_number(Some(table_number));
        self.events.open();
        Ok(response.guest)
    }

    /// Logout; the session ends and the realtime channel closes even if the
    /// backend call fails
    pub async fn logout(&self) -> ClientResult<()> {
        let result = match self.session().role() {
            Some(shared::models::Role::Guest) => self.auth().guest_logout().await,
            Some(_) => self.auth().logout().await,
            None => Ok(()),
        };
        self.session().end();
        self.events.close();
        result
    }

    pub fn auth(&self) -> AuthApi<'_, NetworkHttpClient> {
        AuthApi::new(&self.http)
    }

    pub fn orders(&self) -> OrderApi<'_, NetworkHttpClient> {
        OrderApi::new(&self.http)
    }

    pub fn guests(&self) -> GuestApi<'_, NetworkHttpClient> {
        GuestApi::new(&self.http)
    }

    pub fn tables(&self) -> TableApi<'_, NetworkHttpClient> {
        TableApi::new(&self.http)
    }

    pub fn dishes(&self) -> DishApi<'_, NetworkHttpClient> {
        DishApi::new(&self.http)
    }

    pub fn categories(&self) -> CategoryApi<'_, NetworkHttpClient> {
        CategoryApi::new(&self.http)
    }

    pub fn ingredients(&self) -> IngredientApi<'_, NetworkHttpClient> {
        IngredientApi::new(&self.http)
    }

    pub fn menus(&self) -> MenuApi<'_, NetworkHttpClient> {
        MenuApi::new(&self.http)
    }

    pub fn payments(&self) -> PaymentApi<'_, NetworkHttpClient> {
        PaymentApi::new(&self.http)
    }

    pub fn accounts(&self) -> AccountApi<'_, NetworkHttpClient> {
        AccountApi::new(&self.http)
    }

    pub fn indicators(&self) -> IndicatorApi<'_, NetworkHttpClient> {
        IndicatorApi::new(&self.http)
    }
}
