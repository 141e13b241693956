//! HTTP handlers for player routes

use crate::config::PagingConfig;
use crate::core::error::PlayerResult;
use crate::core::player::{Player, PlayerPayload};
use crate::core::query::PlayerQuery;
use crate::core::service::PlayerService;
use crate::core::validation::{PlayerId, ValidJson, ValidQuery};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

/// Shared state of the player routes
#[derive(Clone)]
pub struct AppState {
    pub service: PlayerService,
    pub paging: PagingConfig,
}

/// GET /players: filtered, ordered, paged listing
pub async fn list_players(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<PlayerQuery>,
) -> PlayerResult<Json<Vec<Player>>> {
    let filter = query.criteria()?.to_filter();
    let page = query.page_request(&state.paging)?;
    let players = state.service.list(&filter, &page).await?;
    Ok(Json(players))
}

/// GET /players/count: size of the unpaged match set
pub async fn count_players(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<PlayerQuery>,
) -> PlayerResult<Json<usize>> {
    let filter = query.criteria()?.to_filter();
    Ok(Json(state.service.count(&filter).await?))
}

/// POST /players
pub async fn create_player(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<PlayerPayload>,
) -> PlayerResult<Json<Player>> {
    Ok(Json(state.service.create(payload).await?))
}

/// GET /players/{id}
pub async fn get_player(
    State(state): State<AppState>,
    PlayerId(id): PlayerId,
) -> PlayerResult<Json<Player>> {
    Ok(Json(state.service.get(id).await?))
}

/// POST|PATCH /players/{id}: partial update
pub async fn update_player(
    State(state): State<AppState>,
    PlayerId(id): PlayerId,
    ValidJson(payload): ValidJson<PlayerPayload>,
) -> PlayerResult<Json<Player>> {
    Ok(Json(state.service.update(id, payload).await?))
}

/// DELETE /players/{id}
pub async fn delete_player(
    State(state): State<AppState>,
    PlayerId(id): PlayerId,
) -> PlayerResult<StatusCode> {
    state.service.delete(id).await?;
    Ok(StatusCode::OK)
}
