use axum::{http::Method, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod state;
pub mod views;

pub use state::{AppState, DataState};

pub fn app(state: AppState) -> Router {
    // Read-only API
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::USER_AGENT,
        ]);

    Router::new()
        .merge(views::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
