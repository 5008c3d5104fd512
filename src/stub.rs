//! In-memory stand-in for the storefront HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the same routes and JSON shapes as the production service under
//! `/api` so the client can run locally and integration tests can hit real
//! HTTP. Data lives in process memory only and is lost on exit.
//!
//! A failure switch makes every route answer 500, which is how the client's
//! error paths are exercised end to end.

#[cfg(test)]
#[path = "stub_test.rs"]
mod stub_test;

use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use serde_json::{Value, json};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::net::types::{GiftBox, HealthStatus, OrderForm, OrderReceipt, OrderRecord, OrderSummary};

const REQUIRED_ORDER_FIELDS: [&str; 4] = ["box_id", "customer_name", "customer_email", "customer_phone"];

// =============================================================================
// STATE
// =============================================================================

#[derive(Debug, Default)]
pub struct StubStore {
    pub boxes: Vec<GiftBox>,
    pub orders: Vec<OrderRecord>,
    pub failing: bool,
    next_order_id: i64,
}

/// Shared stub state, injected into handlers via the `State` extractor.
#[derive(Clone, Debug)]
pub struct StubState {
    pub store: Arc<RwLock<StubStore>>,
}

impl StubState {
    #[must_use]
    pub fn new(boxes: Vec<GiftBox>) -> Self {
        let store = StubStore { boxes, orders: Vec::new(), failing: false, next_order_id: 1 };
        Self { store: Arc::new(RwLock::new(store)) }
    }

    /// State preloaded with a small demo catalog.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(demo_boxes())
    }

    /// Make every route answer 500 until switched back.
    pub async fn set_failing(&self, failing: bool) {
        self.store.write().await.failing = failing;
    }

    pub async fn orders(&self) -> Vec<OrderRecord> {
        self.store.read().await.orders.clone()
    }
}

#[must_use]
pub fn demo_boxes() -> Vec<GiftBox> {
    let gift = |id, title: &str, description: &str, price, created_at: &str| GiftBox {
        id,
        title: title.to_owned(),
        description: description.to_owned(),
        price,
        image_url: format!("https://img.giftbox.local/boxes/{id}.jpg"),
        created_at: created_at.to_owned(),
    };
    vec![
        gift(1, "Классическая", "Крафтовая коробка с лентой", 1500.0, "2025-01-10T09:00:00+00:00"),
        gift(2, "Праздничная", "Красная коробка с бантом и наполнителем", 2490.0, "2025-02-14T09:00:00+00:00"),
        gift(3, "Мини", "Небольшая коробка для сувенира", 790.0, "2025-03-08T09:00:00+00:00"),
    ]
}

// =============================================================================
// ROUTER
// =============================================================================

/// Stub routes with open CORS and request tracing.
pub fn app(state: StubState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health))
        .route("/api/boxes", get(list_boxes))
        .route("/api/boxes/{id}", get(get_box))
        .route("/api/orders", get(list_orders).post(create_order))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the stub on an already-bound listener until the task is dropped.
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections.
pub async fn serve(listener: tokio::net::TcpListener, state: StubState) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "giftbox stub listening");
    }
    axum::serve(listener, app(state)).await
}

// =============================================================================
// HANDLERS
// =============================================================================

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

fn forced_failure() -> Response {
    error_response(StatusCode::INTERNAL_SERVER_ERROR, "stub forced failure")
}

/// `GET /api/health`
pub async fn health(State(state): State<StubState>) -> Response {
    if state.store.read().await.failing {
        let body = HealthStatus { status: "error".into(), message: "stub forced failure".into() };
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
    }
    Json(HealthStatus { status: "ok".into(), message: "API работает".into() }).into_response()
}

/// `GET /api/boxes` — newest first.
pub async fn list_boxes(State(state): State<StubState>) -> Response {
    let store = state.store.read().await;
    if store.failing {
        return forced_failure();
    }
    let mut boxes = store.boxes.clone();
    boxes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Json(boxes).into_response()
}

/// `GET /api/boxes/{id}`
pub async fn get_box(State(state): State<StubState>, Path(id): Path<i64>) -> Response {
    let store = state.store.read().await;
    if store.failing {
        return forced_failure();
    }
    match store.boxes.iter().find(|b| b.id == id) {
        Some(gift) => Json(gift.clone()).into_response(),
        None => error_response(StatusCode::NOT_FOUND, "Коробка не найдена"),
    }
}

/// `POST /api/orders`
pub async fn create_order(State(state): State<StubState>, Json(body): Json<Value>) -> Response {
    let mut store = state.store.write().await;
    if store.failing {
        return forced_failure();
    }
    if let Some(field) = missing_order_field(&body) {
        return error_response(StatusCode::BAD_REQUEST, format!("Поле {field} обязательно"));
    }
    let form: OrderForm = match serde_json::from_value(body) {
        Ok(form) => form,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };

    let id = store.next_order_id;
    store.next_order_id += 1;
    let order = OrderRecord {
        id,
        box_id: form.box_id,
        customer_name: form.customer_name,
        customer_email: form.customer_email,
        customer_phone: form.customer_phone,
        created_at: now_rfc3339(),
    };
    store.orders.push(order.clone());
    tracing::info!(order_id = id, box_id = order.box_id, "stub order created");

    let receipt = OrderReceipt {
        status: "success".into(),
        message: "Заказ создан успешно".into(),
        order: Some(order),
    };
    (StatusCode::CREATED, Json(receipt)).into_response()
}

/// `GET /api/orders` — newest first, left-joined with boxes.
pub async fn list_orders(State(state): State<StubState>) -> Response {
    let store = state.store.read().await;
    if store.failing {
        return forced_failure();
    }
    let summaries: Vec<OrderSummary> = store
        .orders
        .iter()
        .rev()
        .map(|order| {
            let gift = store.boxes.iter().find(|b| b.id == order.box_id);
            OrderSummary {
                order: order.clone(),
                box_title: gift.map(|b| b.title.clone()),
                box_price: gift.map(|b| b.price),
            }
        })
        .collect();
    Json(summaries).into_response()
}

/// First required key absent from the body, in wire order.
fn missing_order_field(body: &Value) -> Option<&'static str> {
    REQUIRED_ORDER_FIELDS
        .into_iter()
        .find(|field| body.get(field).is_none())
}

const EPOCH_RFC3339: &str = "1970-01-01T00:00:00Z";

fn now_rfc3339() -> String {
    format_rfc3339(OffsetDateTime::now_utc())
}

fn format_rfc3339(at: OffsetDateTime) -> String {
    match at.format(&Rfc3339) {
        Ok(stamp) => stamp,
        Err(e) => {
            tracing::warn!(error = %e, "created_at formatting failed; using epoch");
            EPOCH_RFC3339.to_owned()
        }
    }
}
