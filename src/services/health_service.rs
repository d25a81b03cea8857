use crate::{dto::health::HealthResponse, state::SharedState};

/// Report whether memory and the overlay file agree, along with store sizes.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    let library = state.library().await;
    let catalog_games = library.catalog().len();
    let overlay_games = library.overlay().len();

    if state.is_degraded() {
        HealthResponse::degraded(catalog_games, overlay_games)
    } else {
        HealthResponse::ok(catalog_games, overlay_games)
    }
}
