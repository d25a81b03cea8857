use serde::Serialize;
use utoipa::ToSchema;

/// Health response returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status ("ok" or "degraded" when the last overlay save failed).
    pub status: String,
    /// Number of built-in catalog games.
    pub catalog_games: usize,
    /// Number of user-added or user-edited games held in the overlay.
    pub overlay_games: usize,
}

impl HealthResponse {
    /// Create a health response indicating the overlay file is in sync with memory.
    pub fn ok(catalog_games: usize, overlay_games: usize) -> Self {
        Self {
            status: "ok".to_string(),
            catalog_games,
            overlay_games,
        }
    }

    /// Create a health response indicating memory holds changes missing from disk.
    pub fn degraded(catalog_games: usize, overlay_games: usize) -> Self {
        Self {
            status: "degraded".to_string(),
            catalog_games,
            overlay_games,
        }
    }
}
