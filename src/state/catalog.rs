use crate::dao::models::{GameEntity, GameId};

/// Immutable catalog of built-in games, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    games: Vec<GameEntity>,
}

impl Catalog {
    /// Wrap the catalog records, keeping their original order.
    pub fn new(games: Vec<GameEntity>) -> Self {
        Self { games }
    }

    /// Catalog records in their original order.
    pub fn games(&self) -> &[GameEntity] {
        &self.games
    }

    /// First catalog record carrying `id`.
    pub fn get(&self, id: GameId) -> Option<&GameEntity> {
        self.games.iter().find(|game| game.id == id)
    }

    /// Number of catalog records.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Whether the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Highest identifier present in the catalog.
    pub fn max_id(&self) -> Option<GameId> {
        self.games.iter().map(|game| game.id).max()
    }
}
