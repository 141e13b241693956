//! Server module for building the player registry HTTP server
//!
//! This module provides a `ServerBuilder` that registers:
//! - Player CRUD and search routes under the configured base path
//! - Health check routes

pub mod builder;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::AppState;
pub use router::{build_player_routes, build_router};
