//! Order CRUD endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use domain::{Order, OrderId, OrderInput, OrderService};
use publisher::OrderPublisher;
use serde::Serialize;
use store::OrderStore;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: OrderStore, P: OrderPublisher> {
    pub order_service: OrderService<S, P>,
}

/// Body accepted by create and update. `null` reaches the validator as a
/// missing order.
type OrderPayload = Result<Json<Option<OrderInput>>, JsonRejection>;

// -- Response types --

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: String,
    pub customer: String,
    pub total: f64,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.to_string(),
            customer: order.customer,
            total: order.total,
        }
    }
}

// -- Handlers --

/// POST /orders: create a new order.
#[tracing::instrument(skip(state, payload))]
pub async fn create<S: OrderStore + 'static, P: OrderPublisher + 'static>(
    State(state): State<Arc<AppState<S, P>>>,
    payload: OrderPayload,
) -> Result<(StatusCode, Json<OrderResponse>), ApiError> {
    let Json(input) = payload?;
    let order = state.order_service.create(input).await?;

    Ok((StatusCode::CREATED, Json(order.into())))
}

/// GET /orders/:id: load an order by ID.
#[tracing::instrument(skip(state))]
pub async fn get<S: OrderStore + 'static, P: OrderPublisher + 'static>(
    State(state): State<Arc<AppState<S, P>>>,
    Path(id): Path<String>,
) -> Result<Json<OrderResponse>, ApiError> {
    let order = state.order_service.get(&OrderId::new(id)).await?;

    Ok(Json(order.into()))
}

/// PUT /orders/:id: replace an existing order. The path ID is kept.
#[tracing::instrument(skip(state, payload))]
pub async fn update<S: OrderStore + 'static, P: OrderPublisher + 'static>(
    State(state): State<Arc<AppState<S, P>>>,
    Path(id): Path<String>,
    payload: OrderPayload,
) -> Result<Json<OrderResponse>, ApiError> {
    let Json(input) = payload?;
    let order = state
        .order_service
        .update(&OrderId::new(id), input)
        .await?;

    Ok(Json(order.into()))
}

/// DELETE /orders/:id: remove an order.
#[tracing::instrument(skip(state))]
pub async fn delete<S: OrderStore + 'static, P: OrderPublisher + 'static>(
    State(state): State<Arc<AppState<S, P>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.order_service.delete(&OrderId::new(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}
