use axum::Router;

use crate::state::SharedState;

/// Swagger UI and OpenAPI document.
pub mod docs;
/// Extractors reporting rejections as JSON errors.
pub mod extract;
/// Game routes.
pub mod game;
/// Health check route.
pub mod health;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    health::router()
        .merge(game::router())
        .merge(docs::router())
        .with_state(state)
}
