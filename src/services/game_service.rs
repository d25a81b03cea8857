use tracing::{debug, info};
use validator::Validate;

use crate::{
    dao::models::GameId,
    dto::game::{EditGameResponse, GameInput, GameResponse, GameSavedResponse},
    error::ServiceError,
    state::{SharedState, library::GameDraft},
};

/// Every game a visitor should see: overlay games first, then catalog games they do not shadow.
pub async fn list_games(state: &SharedState) -> Vec<GameResponse> {
    let library = state.library().await;
    library.merged().into_iter().map(Into::into).collect()
}

/// Add a user-authored game to the overlay and persist it.
///
/// On a failed save the game stays in memory and the error is returned to the caller. Once the
/// highest id in use is `u64::MAX` nothing is added and the call is rejected as invalid input.
pub async fn create_game(
    state: &SharedState,
    input: GameInput,
) -> Result<GameSavedResponse, ServiceError> {
    let draft = validated_draft(input)?;

    let mut library = state.library_mut().await;
    let game = library
        .create(draft, &state.config().placeholder_image)
        .ok_or_else(|| ServiceError::InvalidInput("identifier space exhausted".into()))?;
    state.persist(library.overlay()).await?;
    drop(library);

    info!(id = game.id, title = %game.title, "game added");
    Ok(GameSavedResponse {
        message: format!("Game \"{}\" added successfully!", game.title),
        game: game.into(),
    })
}

/// Return the editable overlay copy of a game, copying a catalog game into the overlay the
/// first time it is requested.
///
/// A failed save after copying is logged and tracked as degraded mode but does not fail the
/// request: the copy is already the in-memory truth.
pub async fn edit_game(state: &SharedState, id: GameId) -> Result<EditGameResponse, ServiceError> {
    let mut library = state.library_mut().await;
    let target = library
        .edit_target(id, &state.config().placeholder_guide)
        .ok_or(ServiceError::NotFound(id))?;

    let materialized = target.is_materialized();
    if materialized {
        info!(id, "copied catalog game into overlay for editing");
        let _ = state.persist(library.overlay()).await;
    }
    drop(library);

    Ok(EditGameResponse {
        materialized,
        game: target.into_game().into(),
    })
}

/// Overwrite title, description and guide of a game and persist the overlay.
///
/// Input is validated before anything changes, so a rejected edit never copies a catalog game.
pub async fn update_game(
    state: &SharedState,
    id: GameId,
    input: GameInput,
) -> Result<GameSavedResponse, ServiceError> {
    let draft = validated_draft(input)?;

    let mut library = state.library_mut().await;
    let (game, materialized) = library
        .apply_edit(id, draft, &state.config().placeholder_guide)
        .ok_or(ServiceError::NotFound(id))?;
    state.persist(library.overlay()).await?;
    drop(library);

    info!(id, materialized, "game updated");
    Ok(GameSavedResponse {
        message: "Changes saved successfully!".into(),
        game: game.into(),
    })
}

/// Look a game up for display, preferring the overlay version.
pub async fn get_guide(state: &SharedState, id: GameId) -> Result<GameResponse, ServiceError> {
    let library = state.library().await;
    let game = library.guide(id).cloned().ok_or_else(|| {
        debug!(id, "guide requested for unknown game");
        ServiceError::NotFound(id)
    })?;
    Ok(game.into())
}

fn validated_draft(input: GameInput) -> Result<GameDraft, ServiceError> {
    input.validate()?;
    Ok(input.into())
}
