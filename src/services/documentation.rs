use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the game guides service.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::game::list_games,
        crate::routes::game::create_game,
        crate::routes::game::edit_game,
        crate::routes::game::update_game,
        crate::routes::game::get_guide,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::game::GameInput,
            crate::dto::game::GameResponse,
            crate::dto::game::GameSavedResponse,
            crate::dto::game::EditGameResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "games", description = "Game listing, editing and guides"),
    )
)]
pub struct ApiDoc;
