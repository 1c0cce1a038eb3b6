mod error;
mod handlers;

pub use error::ApiError;

use std::sync::Arc;

use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::engine::Engine;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Engine>,
}

impl AppState {
    pub fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/create-room", post(handlers::create_room))
        .route("/book-room", post(handlers::book_room))
        .route("/booked-rooms", get(handlers::booked_rooms))
        .route("/customer-bookings", get(handlers::customer_bookings))
        .route("/customer-statistics", get(handlers::customer_statistics))
        .route("/rooms", get(handlers::list_rooms))
        .route("/rooms/{id}/bookings", get(handlers::room_bookings))
        .route("/rooms/{id}/availability", get(handlers::room_availability))
        .route("/health", get(handlers::health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
