//! Library crate for game-guides, exposing modules for the binary and integration tests.

/// Runtime configuration loaded from `config/app.json`.
pub mod config;
/// Persisted records, catalog sources and the overlay store.
pub mod dao;
/// Request and response payloads.
pub mod dto;
/// Service and HTTP error types.
pub mod error;
/// HTTP routes.
pub mod routes;
/// Operations behind the routes.
pub mod services;
/// In-memory catalog, overlay and shared application state.
pub mod state;

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{
    config::AppConfig,
    dao::{
        catalog,
        game_store::{GameStore, json_file::JsonFileStore},
    },
    state::{AppState, SharedState, catalog::Catalog, load_overlay},
};

/// Load the catalog and the overlay described by `config` and build the shared state.
///
/// A broken overlay file never prevents startup; an unreadable external catalog does.
pub async fn bootstrap(config: AppConfig) -> anyhow::Result<SharedState> {
    let games = match &config.catalog_path {
        Some(path) => catalog::read_from(path)
            .await
            .with_context(|| format!("loading catalog from `{}`", path.display()))?,
        None => catalog::bundled().context("decoding bundled catalog")?,
    };
    info!(count = games.len(), "loaded catalog games");

    let store: Arc<dyn GameStore> = Arc::new(JsonFileStore::new(config.overlay_path.clone()));
    let loaded = load_overlay(store.as_ref()).await;

    Ok(AppState::new(
        config,
        store,
        Catalog::new(games),
        loaded.overlay,
    ))
}

/// Build the top-level router and attach cross-cutting middleware layers.
pub fn build_router(state: SharedState) -> Router<()> {
    routes::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
