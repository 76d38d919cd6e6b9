//! HTTP API server with observability for the order service.
//!
//! Provides REST endpoints for order management, with structured logging
//! (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use domain::OrderService;
use metrics_exporter_prometheus::PrometheusHandle;
use publisher::OrderPublisher;
use store::OrderStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::orders::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S, P>(state: Arc<AppState<S, P>>, metrics_handle: PrometheusHandle) -> Router
where
    S: OrderStore + 'static,
    P: OrderPublisher + 'static,
{
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/orders", post(routes::orders::create::<S, P>))
        .route(
            "/orders/{id}",
            get(routes::orders::get::<S, P>)
                .put(routes::orders::update::<S, P>)
                .delete(routes::orders::delete::<S, P>),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state around a store and a publisher.
pub fn create_state<S, P>(store: S, publisher: P) -> Arc<AppState<S, P>>
where
    S: OrderStore,
    P: OrderPublisher,
{
    Arc::new(AppState {
        order_service: OrderService::new(store, publisher),
    })
}
