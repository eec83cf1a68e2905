// bistro-client/tests/client_integration.rs
// Client against an in-process mock backend

mod common;

use std::sync::Arc;

use bistro_client::{
    BistroClient, ClientConfig, ClientError, DateRange, FileSessionStorage, InvalidationRouter,
    OrderBoard, RefreshDecision, Session,
};
use chrono::{TimeZone, Utc};
use common::{MockBackend, OWNER_EMAIL, OWNER_PASSWORD, TABLE_TOKEN};
use rust_decimal::Decimal;
use shared::cart::Cart;
use shared::client::TokenPair;
use shared::event::QueryKey;
use shared::models::{
    CreateOrders, Dish, DishStatus, OrderItemInput, OrderMode, OrderStatus, Role,
};
use shared::token::TokenType;
use tempfile::TempDir;

fn client(backend: &MockBackend) -> BistroClient {
    BistroClient::new(&ClientConfig::new(backend.url()), Session::in_memory()).unwrap()
}

fn range() -> DateRange {
    DateRange::new(
        Utc.with_ymd_and_hms(2026, 10, 18, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0).unwrap(),
    )
}

#[tokio::test]
async fn test_login_sends_bearer_and_date_range() {
    let backend = MockBackend::start().await;
    let client = client(&backend);

    let account = client.login(OWNER_EMAIL, OWNER_PASSWORD).await.unwrap();
    assert_eq!(account.role, Role::Owner);
    assert_eq!(client.session().role(), Some(Role::Owner));
    assert!(client.events().is_open());

    let orders = client.orders().list(range()).await.unwrap();
    assert_eq!(orders.len(), 5);

    let recorded = backend.recorded();
    let auth = recorded.authorization[0].as_deref().unwrap();
    assert!(auth.starts_with("Bearer "));
    let query = &recorded.order_queries[0];
    assert_eq!(query["fromDate"], "2026-10-18T00:00:00Z");
    assert_eq!(query["toDate"], "2026-10-19T00:00:00Z");
}

#[tokio::test]
async fn test_wrong_password_is_unauthorized() {
    let backend = MockBackend::start().await;
    let client = client(&backend);

    let err = client.login(OWNER_EMAIL, "nope").await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(!client.session().is_active());
    assert!(!client.events().is_open());
}

#[tokio::test]
async fn test_request_without_session_is_unauthorized() {
    let backend = MockBackend::start().await;
    let client = client(&backend);

    let err = client.orders().list(range()).await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized(ref m) if m == "Access token missing"));
}

#[tokio::test]
async fn test_validation_error_carries_fields() {
    let backend = MockBackend::start().await;
    let client = client(&backend);
    client.login(OWNER_EMAIL, OWNER_PASSWORD).await.unwrap();

    let req = CreateOrders {
        guest_id: Some(10),
        table_number: 1,
        guest_name: None,
        mode: OrderMode::DineIn,
        orders: vec![OrderItemInput {
            dish_id: 3,
            quantity: 99,
        }],
    };
    let err = client.orders().create(&req).await.unwrap_err();
    let fields = err.field_errors();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].field, "orders.0.quantity");
}

#[tokio::test]
async fn test_not_found_maps() {
    let backend = MockBackend::start().await;
    let client = client(&backend);
    client.login(OWNER_EMAIL, OWNER_PASSWORD).await.unwrap();

    let err = client.tables().get(99).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(ref m) if m == "Table not found"));
}

#[tokio::test]
async fn test_logout_ends_session_and_closes_events() {
    let backend = MockBackend::start().await;
    let client = client(&backend);
    client.login(OWNER_EMAIL, OWNER_PASSWORD).await.unwrap();
    let mut rx = client.events().subscribe().unwrap();

    client.logout().await.unwrap();

    assert_eq!(backend.recorded().logout_calls, 1);
    assert!(!client.session().is_active());
    assert!(!client.events().is_open());
    assert!(rx.recv().await.is_err());
}

#[tokio::test]
async fn test_guest_login_keeps_table_hint() {
    let backend = MockBackend::start().await;
    let dir = TempDir::new().unwrap();
    let storage = Arc::new(FileSessionStorage::new(dir.path(), "session.json"));
    let session = Session::new(storage.clone());
    let client = BistroClient::new(&ClientConfig::new(backend.url()), session).unwrap();

    let guest = client.guest_login("Mai", 7, TABLE_TOKEN).await.unwrap();
    assert_eq!(guest.name, "Mai");
    assert_eq!(client.session().role(), Some(Role::Guest));
    assert!(storage.exists());

    client.logout().await.unwrap();

    // A fresh process sees no tokens but remembers the table
    let restored = Session::new(storage);
    assert!(!restored.is_active());
    assert_eq!(restored.table_number(), Some(7));
}

fn dish(id: i64, status: DishStatus) -> Dish {
    let at = Utc.with_ymd_and_hms(2026, 10, 1, 9, 0, 0).unwrap();
    Dish {
        id,
        name: format!("Dish {}", id),
        price: Decimal::new(4550, 2),
        description: String::new(),
        image: String::new(),
        status,
        category_id: None,
        created_at: at,
        updated_at: at,
    }
}

#[tokio::test]
async fn test_guest_submits_cart() {
    let backend = MockBackend::start().await;
    let client = client(&backend);
    client.guest_login("Mai", 7, TABLE_TOKEN).await.unwrap();

    let mut cart = Cart::new();
    let err = client.guests().submit_cart(&cart).await.unwrap_err();
    assert_eq!(err.user_message(), "Cart is empty");
    assert!(backend.recorded().authorization.is_empty());

    cart.add(&dish(5, DishStatus::Available), 2).unwrap();
    cart.add(&dish(3, DishStatus::Available), 1).unwrap();
    assert!(cart.add(&dish(8, DishStatus::Unavailable), 1).is_err());

    let orders = client.guests().submit_cart(&cart).await.unwrap();
    assert_eq!(orders.len(), 2);
    // Lines are submitted in dish id order
    assert_eq!(orders[0].dish_snapshot.dish_id, Some(3));
    assert_eq!(orders[1].quantity, 2);
    assert!(orders.iter().all(|o| o.table_number == Some(7)));
}

#[tokio::test]
async fn test_check_and_refresh() {
    let backend = MockBackend::start().await;
    let client = client(&backend);
    let now = Utc::now().timestamp();

    // Fresh tokens: nothing to do
    client.login(OWNER_EMAIL, OWNER_PASSWORD).await.unwrap();
    let decision = client.auth().check_and_refresh().await.unwrap();
    assert_eq!(decision, RefreshDecision::Fresh);
    assert_eq!(backend.recorded().refresh_calls, 0);

    // Access token in its last third: refreshed
    let stale = TokenPair {
        access_token: common::token(Role::Owner, TokenType::AccessToken, now - 800, now + 100),
        refresh_token: common::token(Role::Owner, TokenType::RefreshToken, now - 800, now + 86_000),
    };
    client.session().set_tokens(stale.clone()).unwrap();
    let decision = client.auth().check_and_refresh().await.unwrap();
    assert_eq!(decision, RefreshDecision::Refresh);
    assert_eq!(backend.recorded().refresh_calls, 1);
    assert_ne!(client.session().access_token(), Some(stale.access_token));

    // Refresh token expired: session ends without a backend call
    let expired = TokenPair {
        access_token: common::token(Role::Owner, TokenType::AccessToken, now - 2_000, now - 1_100),
        refresh_token: common::token(Role::Owner, TokenType::RefreshToken, now - 2_000, now - 10),
    };
    client.session().set_tokens(expired).unwrap();
    let decision = client.auth().check_and_refresh().await.unwrap();
    assert_eq!(decision, RefreshDecision::Expired);
    assert!(!client.session().is_active());
    assert_eq!(backend.recorded().refresh_calls, 1);
}

#[tokio::test]
async fn test_board_refresh_aggregates() {
    let backend = MockBackend::start().await;
    let client = client(&backend);
    client.login(OWNER_EMAIL, OWNER_PASSWORD).await.unwrap();

    let mut board = OrderBoard::default();
    let stats = board.refresh(&client.orders(), range()).await.unwrap();

    assert_eq!(stats.status.total(), 5);
    assert_eq!(stats.guest_counts(1, 10).unwrap().get(OrderStatus::Pending), 1);
    assert_eq!(stats.guest_counts(1, 10).unwrap().get(OrderStatus::Paid), 1);
    assert!(stats.is_serving(11));
    assert!(!stats.is_serving(12));
    // Guest 13 ordered without a table: serving but unseated
    assert!(stats.serving.unseated.contains_key(&13));
    assert_eq!(board.recompute_count(), 1);

    backend.set_orders(vec![common::order(6, Some(3), Some(20), OrderStatus::Pending)]);
    let stats = board.refresh(&client.orders(), range()).await.unwrap();
    assert_eq!(stats.serving_table_numbers(), vec![3]);
    assert_eq!(board.recompute_count(), 2);
}

#[tokio::test]
async fn test_realtime_invalidation_drives_refetch() {
    let backend = MockBackend::start().await;
    let client = client(&backend);
    client.login(OWNER_EMAIL, OWNER_PASSWORD).await.unwrap();

    let (router, mut invalidations) = InvalidationRouter::new(4);
    let mut orders_rx = invalidations.take(QueryKey::Orders).unwrap();
    tokio::spawn(router.run(client.events().subscribe().unwrap()));

    let updated = common::order(7, Some(2), Some(30), OrderStatus::Processing);
    let payload = serde_json::to_value(updated).unwrap();
    client.events().publish_named("update-order", payload).unwrap();

    let event = orders_rx.recv().await.unwrap();
    assert_eq!(event.orders()[0].id, 7);

    let mut board = OrderBoard::default();
    board.refresh(&client.orders(), range()).await.unwrap();
    assert_eq!(backend.recorded().order_queries.len(), 1);

    client.logout().await.unwrap();
    assert!(orders_rx.recv().await.is_none());
}
