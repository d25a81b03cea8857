use indexmap::IndexMap;

use crate::dao::models::{GameEntity, GameId};

/// In-memory overlay of user-added and user-edited games, keyed by identifier.
///
/// Insertion order is kept so listings show overlay games in the order they were first added.
#[derive(Debug, Clone, Default)]
pub struct Overlay {
    games: IndexMap<GameId, GameEntity>,
}

impl Overlay {
    /// Build an overlay from persisted records. On duplicate ids the first record wins.
    pub fn from_games(games: Vec<GameEntity>) -> Self {
        let mut map = IndexMap::with_capacity(games.len());
        for game in games {
            map.entry(game.id).or_insert(game);
        }
        Self { games: map }
    }

    /// Overlay record for `id`.
    pub fn get(&self, id: GameId) -> Option<&GameEntity> {
        self.games.get(&id)
    }

    /// Whether the overlay shadows `id`.
    pub fn contains(&self, id: GameId) -> bool {
        self.games.contains_key(&id)
    }

    /// Append a new record, or replace the existing one in place when the id is already present.
    pub fn upsert(&mut self, game: GameEntity) {
        self.games.insert(game.id, game);
    }

    /// Mutable access to the record for `id`.
    pub fn get_mut(&mut self, id: GameId) -> Option<&mut GameEntity> {
        self.games.get_mut(&id)
    }

    /// Overlay records in insertion order.
    pub fn games(&self) -> impl Iterator<Item = &GameEntity> {
        self.games.values()
    }

    /// Owned copy of the overlay records, suitable for persistence.
    pub fn to_vec(&self) -> Vec<GameEntity> {
        self.games.values().cloned().collect()
    }

    /// Number of overlay records.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Whether the overlay is empty.
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Highest identifier present in the overlay.
    pub fn max_id(&self) -> Option<GameId> {
        self.games.keys().copied().max()
    }
}
