/// JSON file implementation of [`GameStore`].
pub mod json_file;

use futures::future::BoxFuture;

use crate::dao::{models::GameEntity, storage::StorageResult};

/// Abstraction over the persistence layer holding the overlay games.
pub trait GameStore: Send + Sync {
    /// Load every overlay game. An absent or blank backing store yields an empty list.
    fn load(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>>;
    /// Replace the full persisted collection with `games`.
    fn save(&self, games: Vec<GameEntity>) -> BoxFuture<'static, StorageResult<()>>;
    /// Human readable location of the backing store, used in logs.
    fn location(&self) -> String;
}
