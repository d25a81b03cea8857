//! Request extractors whose rejections render as [`AppError`] so every failure carries the
//! same `{message}` body.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use axum_valid::Valid;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::{dao::models::GameId, error::AppError};

/// Game identifier taken from the `{id}` path segment. Anything that is not a valid id is
/// reported as an unknown game.
#[derive(Debug, Clone, Copy)]
pub struct GameIdPath(pub GameId);

impl<S> FromRequestParts<S> for GameIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<GameId>::from_request_parts(parts, state).await?;
        Ok(Self(id))
    }
}

/// JSON body checked with its `validator` rules before the handler runs.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Valid(Json(value)) = Valid::<Json<T>>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
