use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    dao::models::{GameEntity, GameId},
    dto::validation::validate_not_blank,
    state::library::GameDraft,
};

/// Text fields submitted when adding or editing a game.
///
/// Missing fields deserialize as empty strings and are rejected by validation.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, Validate)]
pub struct GameInput {
    /// Display title.
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub title: String,
    /// Short description shown in listings.
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub description: String,
    /// Guide body.
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub guide: String,
}

impl GameInput {
    /// Build an input from any string-like values.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        guide: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            guide: guide.into(),
        }
    }
}

impl From<GameInput> for GameDraft {
    fn from(input: GameInput) -> Self {
        Self {
            title: input.title.trim().to_string(),
            description: input.description.trim().to_string(),
            guide: input.guide.trim().to_string(),
        }
    }
}

/// Public projection of a game record.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GameResponse {
    /// Game identifier.
    pub id: GameId,
    /// Display title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Image file name.
    pub image: String,
    /// Absent for catalog games that ship without a guide.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guide: Option<String>,
}

impl From<GameEntity> for GameResponse {
    fn from(entity: GameEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            image: entity.image,
            guide: entity.guide,
        }
    }
}

/// Response returned once a game has been created or updated and saved.
#[derive(Debug, Serialize, ToSchema)]
pub struct GameSavedResponse {
    /// User-facing confirmation message.
    pub message: String,
    /// Game as saved.
    pub game: GameResponse,
}

/// Editable copy of a game returned by the edit view.
#[derive(Debug, Serialize, ToSchema)]
pub struct EditGameResponse {
    /// True when this request copied a catalog game into the overlay.
    pub materialized: bool,
    /// Overlay copy to edit.
    pub game: GameResponse,
}
