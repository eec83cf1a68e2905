//! In-process mock of the restaurant backend

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{TimeZone, Utc};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use shared::models::{
    Account, DishSnapshot, DishStatus, Guest, GuestRef, Order, OrderMode, OrderStatus, Role,
};
use shared::token::{TokenPayload, TokenType, encode_unsigned};
use tokio::net::TcpListener;

pub const OWNER_EMAIL: &str = "owner@bistro.test";
pub const OWNER_PASSWORD: &str = "secret";
pub const TABLE_TOKEN: &str = "qr-token-7";

#[derive(Debug, Default)]
pub struct Recorded {
    pub authorization: Vec<Option<String>>,
    pub order_queries: Vec<HashMap<String, String>>,
    pub refresh_calls: usize,
    pub logout_calls: usize,
}

#[derive(Clone, Default)]
struct MockState {
    recorded: Arc<Mutex<Recorded>>,
    orders: Arc<Mutex<Vec<Order>>>,
}

pub struct MockBackend {
    pub addr: SocketAddr,
    recorded: Arc<Mutex<Recorded>>,
    orders: Arc<Mutex<Vec<Order>>>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let state = MockState::default();
        *state.orders.lock() = sample_orders();
        let recorded = Arc::clone(&state.recorded);
        let orders = Arc::clone(&state.orders);

        let app = Router::new()
            .route("/auth/login", post(login))
            .route("/auth/logout", post(logout))
            .route("/auth/refresh-token", post(refresh))
            .route("/guest/auth/login", post(guest_login))
            .route("/guest/auth/logout", post(logout))
            .route("/guest/orders", post(place_guest_orders))
            .route("/orders", get(list_orders).post(create_orders))
            .route("/tables/{number}", get(missing_table))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            recorded,
            orders,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn recorded(&self) -> parking_lot::MutexGuard<'_, Recorded> {
        self.recorded.lock()
    }

    pub fn set_orders(&self, orders: Vec<Order>) {
        *self.orders.lock() = orders;
    }
}

/// Signed-looking token for `role`, valid from `iat` to `exp`
pub fn token(role: Role, token_type: TokenType, iat: i64, exp: i64) -> String {
    encode_unsigned(&TokenPayload {
        user_id: 1,
        role,
        token_type,
        exp,
        iat,
    })
}

pub fn fresh_tokens(role: Role) -> (String, String) {
    let now = Utc::now().timestamp();
    (
        token(role, TokenType::AccessToken, now, now + 900),
        token(role, TokenType::RefreshToken, now, now + 86_400),
    )
}

pub fn order(id: i64, table: Option<i32>, guest: Option<i64>, status: OrderStatus) -> Order {
    let at = Utc.with_ymd_and_hms(2026, 10, 18, 18, 0, 0).unwrap();
    Order {
        id,
        guest_id: guest,
        guest: guest.map(|g| GuestRef {
            id: g,
            name: format!("Guest {}", g),
            table_number: table,
        }),
        table_number: table,
        dish_snapshot: DishSnapshot {
            id,
            name: "Bun cha".to_string(),
            price: Decimal::from(55),
            image: String::new(),
            description: String::new(),
            status: DishStatus::Available,
            dish_id: Some(3),
        },
        quantity: 2,
        status,
        mode: OrderMode::DineIn,
        order_handler_id: None,
        order_handler: None,
        created_at: at,
        updated_at: at,
    }
}

pub fn sample_orders() -> Vec<Order> {
    vec![
        order(1, Some(1), Some(10), OrderStatus::Pending),
        order(2, Some(1), Some(10), OrderStatus::Paid),
        order(3, Some(1), Some(11), OrderStatus::Delivered),
        order(4, Some(2), Some(12), OrderStatus::Rejected),
        order(5, None, Some(13), OrderStatus::Processing),
    ]
}

fn record_auth(state: &MockState, headers: &HeaderMap) -> Option<String> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.recorded.lock().authorization.push(auth.clone());
    auth
}

async fn login(Json(body): Json<Value>) -> impl IntoResponse {
    if body["email"] != OWNER_EMAIL || body["password"] != OWNER_PASSWORD {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Email or password is incorrect" })),
        );
    }
    let (access, refresh) = fresh_tokens(Role::Owner);
    let account = Account {
        id: 1,
        name: "Owner".into(),
        email: OWNER_EMAIL.into(),
        role: Role::Owner,
        avatar: None,
    };
    (
        StatusCode::OK,
        Json(json!({
            "message": "Login successful",
            "data": { "accessToken": access, "refreshToken": refresh, "account": account }
        })),
    )
}

async fn guest_login(Json(body): Json<Value>) -> impl IntoResponse {
    if body["token"] != TABLE_TOKEN {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Table token is invalid" })),
        );
    }
    let (access, refresh) = fresh_tokens(Role::Guest);
    let now = Utc::now();
    let guest = Guest {
        id: 42,
        name: body["name"].as_str().unwrap_or_default().to_string(),
        table_number: body["tableNumber"].as_i64().map(|n| n as i32),
        created_at: now,
        updated_at: now,
    };
    (
        StatusCode::OK,
        Json(json!({
            "message": "Login successful",
            "data": { "accessToken": access, "refreshToken": refresh, "guest": guest }
        })),
    )
}

async fn logout(State(state): State<MockState>) -> Json<Value> {
    state.recorded.lock().logout_calls += 1;
    Json(json!({ "message": "Logged out" }))
}

async fn refresh(State(state): State<MockState>, Json(body): Json<Value>) -> impl IntoResponse {
    if body["refreshToken"].as_str().is_none() {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Refresh token missing" })),
        );
    }
    state.recorded.lock().refresh_calls += 1;
    let (access, refresh) = fresh_tokens(Role::Owner);
    (
        StatusCode::OK,
        Json(json!({
            "message": "Token refreshed",
            "data": { "accessToken": access, "refreshToken": refresh }
        })),
    )
}

async fn list_orders(
    State(state): State<MockState>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    if record_auth(&state, &headers).is_none() {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Access token missing" })),
        );
    }
    state.recorded.lock().order_queries.push(query);
    let orders = state.orders.lock().clone();
    (
        StatusCode::OK,
        Json(json!({ "message": "Orders fetched", "data": orders })),
    )
}

async fn place_guest_orders(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(items): Json<Vec<Value>>,
) -> impl IntoResponse {
    if record_auth(&state, &headers).is_none() {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Access token missing" })),
        );
    }
    let orders: Vec<Order> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let mut o = order(100 + i as i64, Some(7), Some(42), OrderStatus::Pending);
            o.dish_snapshot.dish_id = item["dishId"].as_i64();
            o.quantity = item["quantity"].as_i64().unwrap_or_default() as i32;
            o
        })
        .collect();
    (
        StatusCode::OK,
        Json(json!({ "message": "Orders placed", "data": orders })),
    )
}

async fn create_orders() -> impl IntoResponse {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({
            "message": "Validation error",
            "errors": [
                { "field": "orders.0.quantity", "message": "Quantity must be at most 20" }
            ]
        })),
    )
}

async fn missing_table() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Table not found" })),
    )
}
