//! JSON-over-HTTP front end (feature `server`).
//!
//! - `POST /game/new`: start a game
//! - `POST /game/move`: apply one move to a client-held game
//!
//! No game state lives on the server. The only shared state is the
//! per-client rate limiter, applied as a route layer so it runs before any
//! request body is read.

mod error;
pub mod models;
pub mod rate_limit;
pub mod routes;

use axum::middleware;
use axum::routing::post;
use axum::Router;
use std::sync::Arc;

pub use error::ApiError;
pub use rate_limit::RateLimiter;

/// State shared by every handler.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub limiter: Arc<RateLimiter>,
}

impl AppState {
    pub fn new(limiter: RateLimiter) -> Self {
        Self {
            limiter: Arc::new(limiter),
        }
    }
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/game/new", post(routes::new_game))
        .route("/game/move", post(routes::make_move))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            routes::limit_requests,
        ))
        .with_state(state)
}
