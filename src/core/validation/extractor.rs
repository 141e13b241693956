//! Axum extractors reporting malformed input as `InvalidField`
//!
//! The stock `Json` and `Query` extractors answer with plain-text rejections.
//! These wrappers turn any rejection (bad JSON, unknown enum names, numbers
//! out of range) into the registry's JSON error body with a 400 status.

use crate::core::error::PlayerError;
use crate::core::service::PlayerService;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// JSON body extractor
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_player(
///     ValidJson(payload): ValidJson<PlayerPayload>,
/// ) -> PlayerResult<Json<Player>> {
///     // payload deserialized, enum values already checked
/// }
/// ```
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = PlayerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ValidJson(value)),
            Err(rejection) => Err(PlayerError::invalid("body", rejection.body_text())),
        }
    }
}

/// Query string extractor
pub struct ValidQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = PlayerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(ValidQuery(value)),
            Err(rejection) => Err(PlayerError::invalid("query", rejection.body_text())),
        }
    }
}

/// Player identifier taken from the `{id}` path segment
///
/// Undecodable segments (bad percent-encoding, invalid UTF-8) and values
/// rejected by [`PlayerService::parse_identifier`] both become
/// `InvalidField` on `id`.
pub struct PlayerId(pub i64);

impl<S> FromRequestParts<S> for PlayerId
where
    S: Send + Sync,
{
    type Rejection = PlayerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| PlayerError::invalid("id", rejection.body_text()))?;
        PlayerService::parse_identifier(Some(&raw)).map(PlayerId)
    }
}
