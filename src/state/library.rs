//! Merge and override resolution between the read-only catalog and the user overlay.

use crate::{
    dao::models::{GameEntity, GameId},
    state::{catalog::Catalog, overlay::Overlay},
};

/// Trimmed, non-empty text fields of a game submitted by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameDraft {
    /// Display title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Guide body.
    pub guide: String,
}

/// Where the record returned by [`Library::edit_target`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTarget {
    /// The overlay already held a record for the id.
    Existing(GameEntity),
    /// The catalog record was copied into the overlay by this call.
    Materialized(GameEntity),
}

impl EditTarget {
    /// The editable overlay record.
    pub fn game(&self) -> &GameEntity {
        match self {
            EditTarget::Existing(game) | EditTarget::Materialized(game) => game,
        }
    }

    /// Whether the overlay changed and needs persisting.
    pub fn is_materialized(&self) -> bool {
        matches!(self, EditTarget::Materialized(_))
    }

    /// Consume the target and return the record.
    pub fn into_game(self) -> GameEntity {
        match self {
            EditTarget::Existing(game) | EditTarget::Materialized(game) => game,
        }
    }
}

/// Catalog and overlay viewed together. Only the overlay is ever mutated.
#[derive(Debug, Clone, Default)]
pub struct Library {
    catalog: Catalog,
    overlay: Overlay,
}

impl Library {
    /// Combine a catalog with an overlay loaded from persistence.
    pub fn new(catalog: Catalog, overlay: Overlay) -> Self {
        Self { catalog, overlay }
    }

    /// Read-only catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current overlay.
    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// Overlay records first, then catalog records whose id the overlay does not shadow.
    ///
    /// Each group keeps its own order; nothing is sorted.
    pub fn merged(&self) -> Vec<GameEntity> {
        self.overlay
            .games()
            .chain(
                self.catalog
                    .games()
                    .iter()
                    .filter(|game| !self.overlay.contains(game.id)),
            )
            .cloned()
            .collect()
    }

    /// One past the highest id across both stores, or `1` when both are empty.
    ///
    /// Returns `None` once the highest id is [`GameId::MAX`].
    pub fn next_id(&self) -> Option<GameId> {
        match self
            .catalog
            .max_id()
            .into_iter()
            .chain(self.overlay.max_id())
            .max()
        {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }

    /// Append a brand-new overlay record built from `draft`.
    ///
    /// Returns `None` without touching the overlay when no id is left.
    pub fn create(&mut self, draft: GameDraft, image: &str) -> Option<GameEntity> {
        let game = GameEntity {
            id: self.next_id()?,
            title: draft.title,
            description: draft.description,
            image: image.to_string(),
            guide: Some(draft.guide),
        };
        self.overlay.upsert(game.clone());
        Some(game)
    }

    /// Resolve the editable overlay record for `id`, copying a catalog-only record into the
    /// overlay first. Returns `None` when neither store knows the id.
    pub fn edit_target(&mut self, id: GameId, placeholder_guide: &str) -> Option<EditTarget> {
        if let Some(existing) = self.overlay.get(id) {
            return Some(EditTarget::Existing(existing.clone()));
        }

        let copy = self.catalog.get(id)?.with_guide_or(placeholder_guide);
        self.overlay.upsert(copy.clone());
        Some(EditTarget::Materialized(copy))
    }

    /// Overwrite the text fields of the overlay record for `id`, materializing it first when
    /// only the catalog holds it. The image is never touched.
    pub fn apply_edit(
        &mut self,
        id: GameId,
        draft: GameDraft,
        placeholder_guide: &str,
    ) -> Option<(GameEntity, bool)> {
        let materialized = self.edit_target(id, placeholder_guide)?.is_materialized();
        let game = self.overlay.get_mut(id)?;
        game.title = draft.title;
        game.description = draft.description;
        game.guide = Some(draft.guide);
        Some((game.clone(), materialized))
    }

    /// Record to display for `id`: the overlay version when present, else the catalog one.
    pub fn guide(&self, id: GameId) -> Option<&GameEntity> {
        self.overlay.get(id).or_else(|| self.catalog.get(id))
    }
}
