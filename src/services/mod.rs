/// OpenAPI documentation generation.
pub mod documentation;
/// Listing, creation, editing and guide lookup over the merged library.
pub mod game_service;
/// Health check service.
pub mod health_service;
