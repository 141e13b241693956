//! Router assembly for player and health routes

use super::handlers::{
    AppState, count_players, create_player, delete_player, get_player, list_players,
    update_player,
};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

/// Build player routes
///
/// - GET    /players            - Filtered, ordered, paged listing
/// - GET    /players/count      - Number of players matching the filters
/// - POST   /players            - Create a player
/// - GET    /players/{id}       - Get a player
/// - POST   /players/{id}       - Partially update a player
/// - PATCH  /players/{id}       - Same as POST
/// - DELETE /players/{id}       - Delete a player
pub fn build_player_routes(state: AppState) -> Router {
    Router::new()
        .route("/players", get(list_players).post(create_player))
        .route("/players/count", get(count_players))
        .route(
            "/players/{id}",
            get(get_player)
                .post(update_player)
                .patch(update_player)
                .delete(delete_player),
        )
        .with_state(state)
}

/// Build health check routes
pub fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME")
    }))
}

/// Mount player routes under `base_path` next to the health routes
///
/// `base_path` must be empty or start with '/' without a trailing slash.
pub fn build_router(state: AppState, base_path: &str) -> Router {
    let players = build_player_routes(state);
    let app = if base_path.is_empty() {
        players
    } else {
        Router::new().nest(base_path, players)
    };
    health_routes().merge(app)
}
