/// Catalog loading (bundled or external JSON file).
pub mod catalog;
/// Overlay persistence for user-added and user-edited games.
pub mod game_store;
/// Persisted record definitions.
pub mod models;
/// Storage error types shared by the stores.
pub mod storage;
