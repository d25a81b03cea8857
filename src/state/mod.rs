/// Read-only catalog.
pub mod catalog;
/// Merge and override rules over both stores.
pub mod library;
/// User additions and edits.
pub mod overlay;

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard, watch};
use tracing::{info, warn};

use crate::{
    config::AppConfig,
    dao::{
        game_store::GameStore,
        storage::{StorageError, StorageResult},
    },
};

use self::{catalog::Catalog, library::Library, overlay::Overlay};

/// Application state shared by every handler.
pub type SharedState = Arc<AppState>;

/// Outcome of loading the overlay at startup.
#[derive(Debug)]
pub struct OverlayLoad {
    /// Records to start from; empty when loading failed.
    pub overlay: Overlay,
    /// Failure recovered from while loading, if any.
    pub warning: Option<StorageError>,
}

/// Load the overlay through `store`, substituting an empty overlay on failure.
pub async fn load_overlay(store: &dyn GameStore) -> OverlayLoad {
    match store.load().await {
        Ok(games) => {
            info!(
                location = %store.location(),
                count = games.len(),
                "loaded overlay games"
            );
            OverlayLoad {
                overlay: Overlay::from_games(games),
                warning: None,
            }
        }
        Err(err) => {
            warn!(
                location = %store.location(),
                error = %err,
                "failed to load overlay games; starting with an empty overlay"
            );
            OverlayLoad {
                overlay: Overlay::default(),
                warning: Some(err),
            }
        }
    }
}

/// Central application state owning the merged library and its persistence handle.
pub struct AppState {
    config: AppConfig,
    store: Arc<dyn GameStore>,
    library: RwLock<Library>,
    degraded: watch::Sender<bool>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(
        config: AppConfig,
        store: Arc<dyn GameStore>,
        catalog: Catalog,
        overlay: Overlay,
    ) -> SharedState {
        let (degraded_tx, _rx) = watch::channel(false);
        Arc::new(Self {
            config,
            store,
            library: RwLock::new(Library::new(catalog, overlay)),
            degraded: degraded_tx,
        })
    }

    /// Runtime configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Shared read access to the library.
    pub async fn library(&self) -> RwLockReadGuard<'_, Library> {
        self.library.read().await
    }

    /// Exclusive access to the library. Hold the guard until the overlay has been persisted so
    /// read-modify-persist sequences never interleave.
    pub async fn library_mut(&self) -> RwLockWriteGuard<'_, Library> {
        self.library.write().await
    }

    /// Rewrite the whole overlay file from `overlay`.
    ///
    /// A failure leaves memory ahead of disk and flips the degraded flag until the next
    /// successful save.
    pub async fn persist(&self, overlay: &Overlay) -> StorageResult<()> {
        match self.store.save(overlay.to_vec()).await {
            Ok(()) => {
                self.update_degraded(false);
                Ok(())
            }
            Err(err) => {
                warn!(
                    location = %self.store.location(),
                    error = %err,
                    "failed to save overlay games; memory is ahead of disk"
                );
                self.update_degraded(true);
                Err(err)
            }
        }
    }

    /// Whether the last save failed.
    pub fn is_degraded(&self) -> bool {
        *self.degraded.borrow()
    }

    /// Subscribe to degraded mode updates.
    pub fn degraded_watcher(&self) -> watch::Receiver<bool> {
        self.degraded.subscribe()
    }

    fn update_degraded(&self, value: bool) {
        if self.is_degraded() == value {
            return;
        }

        if value {
            warn!("entering degraded mode");
        } else {
            info!("overlay saved; leaving degraded mode");
        }
        self.degraded.send_replace(value);
    }
}
