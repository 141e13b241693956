//! # Player Registry
//!
//! A REST registry of game characters with composable search filters and
//! level progression derived from experience.
//!
//! ## Features
//!
//! - **Composable filters**: each search criterion is an independent,
//!   optional predicate fragment; present fragments are AND-ed together
//! - **Derived progression**: `level` and `untilNextLevel` are recomputed
//!   from `experience` on every write and can never be set directly
//! - **Eager validation**: every field is checked before the store is touched
//! - **Pluggable storage**: any `PlayerStore` implementation, in-memory included
//! - **Typed errors**: `InvalidField` → 400, `NotFound` → 404, store failures → 500
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use players::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     ServerBuilder::new()
//!         .with_store(InMemoryPlayerStore::new())
//!         .with_config(ServerConfig::default())
//!         .serve()
//!         .await
//! }
//! ```
//!
//! Searching from code:
//!
//! ```rust,ignore
//! let criteria = PlayerCriteria {
//!     race: Some(Race::Elf),
//!     min_level: Some(5),
//!     ..Default::default()
//! };
//! let page = PageRequest::new(0, 10, PlayerOrder::Level);
//! let elves = service.list(&criteria.to_filter(), &page).await?;
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ErrorResponse, InvalidField, NewPlayer, PageRequest, Player, PlayerCriteria, PlayerError,
        PlayerFilter, PlayerOrder, PlayerPayload, PlayerQuery, PlayerResult, PlayerService,
        PlayerStore, Profession, Progress, Race,
    };
    pub use crate::core::level::{MAX_EXPERIENCE, MIN_EXPERIENCE, level, until_next_level};

    // === Storage ===
    pub use crate::storage::InMemoryPlayerStore;

    // === Config ===
    pub use crate::config::{ListenConfig, LoggingConfig, PagingConfig, ServerConfig};

    // === Server ===
    pub use crate::server::{AppState, ServerBuilder, build_router};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
}
