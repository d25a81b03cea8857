use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, put},
};

use crate::{
    dto::game::{EditGameResponse, GameInput, GameResponse, GameSavedResponse},
    error::AppError,
    routes::extract::{GameIdPath, ValidJson},
    services::game_service,
    state::SharedState,
};

/// Routes listing, adding and editing games and serving their guides.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/games", get(list_games).post(create_game))
        .route("/games/{id}", put(update_game))
        .route("/games/{id}/edit", get(edit_game))
        .route("/games/{id}/guide", get(get_guide))
}

/// List catalog and user games, user versions first.
#[utoipa::path(
    get,
    path = "/games",
    tag = "games",
    responses((status = 200, description = "Merged list of games", body = [GameResponse]))
)]
pub async fn list_games(State(state): State<SharedState>) -> Json<Vec<GameResponse>> {
    Json(game_service::list_games(&state).await)
}

/// Add a new game with its guide.
#[utoipa::path(
    post,
    path = "/games",
    tag = "games",
    request_body = GameInput,
    responses(
        (status = 201, description = "Game created", body = GameSavedResponse),
        (status = 400, description = "A required field is blank"),
        (status = 503, description = "Game kept in memory but the overlay file could not be written")
    )
)]
pub async fn create_game(
    State(state): State<SharedState>,
    ValidJson(payload): ValidJson<GameInput>,
) -> Result<(StatusCode, Json<GameSavedResponse>), AppError> {
    let saved = game_service::create_game(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// Fetch the editable copy of a game, copying catalog games into the overlay on first access.
#[utoipa::path(
    get,
    path = "/games/{id}/edit",
    tag = "games",
    params(("id" = u64, Path, description = "Identifier of the game to edit")),
    responses(
        (status = 200, description = "Editable game", body = EditGameResponse),
        (status = 404, description = "Unknown or malformed game id")
    )
)]
pub async fn edit_game(
    State(state): State<SharedState>,
    GameIdPath(id): GameIdPath,
) -> Result<Json<EditGameResponse>, AppError> {
    Ok(Json(game_service::edit_game(&state, id).await?))
}

/// Replace the title, description and guide of a game.
#[utoipa::path(
    put,
    path = "/games/{id}",
    tag = "games",
    params(("id" = u64, Path, description = "Identifier of the game to update")),
    request_body = GameInput,
    responses(
        (status = 200, description = "Game updated", body = GameSavedResponse),
        (status = 400, description = "A required field is blank"),
        (status = 404, description = "Unknown game"),
        (status = 503, description = "Edit kept in memory but the overlay file could not be written")
    )
)]
pub async fn update_game(
    State(state): State<SharedState>,
    GameIdPath(id): GameIdPath,
    ValidJson(payload): ValidJson<GameInput>,
) -> Result<Json<GameSavedResponse>, AppError> {
    Ok(Json(game_service::update_game(&state, id, payload).await?))
}

/// Show a game's guide, preferring the user-edited version.
#[utoipa::path(
    get,
    path = "/games/{id}/guide",
    tag = "games",
    params(("id" = u64, Path, description = "Identifier of the game")),
    responses(
        (status = 200, description = "Game and its guide", body = GameResponse),
        (status = 404, description = "Unknown game")
    )
)]
pub async fn get_guide(
    State(state): State<SharedState>,
    GameIdPath(id): GameIdPath,
) -> Result<Json<GameResponse>, AppError> {
    Ok(Json(game_service::get_guide(&state, id).await?))
}
