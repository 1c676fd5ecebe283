//! Linkpage Server
//!
//! HTTP API for a link-in-bio profile page: profile card, social links,
//! tip jar, premium plans and raw click/view analytics. All state is kept
//! in memory for the lifetime of the process.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod services;
pub mod storage;

use axum::{
    routing::{get, post, put},
    Router,
};
use linkpage_core::{PaymentProvider, Storage};
use services::PaymentService;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub payments: Arc<PaymentService>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>, provider: Option<Arc<dyn PaymentProvider>>) -> Self {
        let payments = Arc::new(PaymentService::new(storage.clone(), provider));
        Self { storage, payments }
    }
}

/// Build the complete router. `static_dir`, when given, serves the
/// frontend with an SPA fallback to its `index.html`.
pub fn build_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let mut app = Router::new()
        .route("/health", get(handlers::health))
        .nest("/api", api_routes());

    if let Some(dir) = static_dir {
        let index = ServeFile::new(dir.join("index.html"));
        app = app.fallback_service(ServeDir::new(dir).fallback(index));
    }

    app.layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    )
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(handlers::users::profile))
        .route("/users", post(handlers::users::create))
        .route(
            "/users/:username",
            get(handlers::users::get_by_username).put(handlers::users::update),
        )
        .route("/social-links", post(handlers::social_links::create))
        .route(
            "/social-links/:id",
            put(handlers::social_links::update).delete(handlers::social_links::delete),
        )
        .route("/tips/:user_id", get(handlers::tips::list))
        .route("/analytics/track", post(handlers::analytics::track))
        .route("/analytics/:user_id", get(handlers::analytics::list))
        .route(
            "/create-payment-intent",
            post(handlers::payments::create_payment_intent),
        )
        .route(
            "/create-subscription",
            post(handlers::payments::create_subscription),
        )
        .route("/plans", get(handlers::payments::plans))
}
