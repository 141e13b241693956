//! Store trait the player service persists through

use crate::core::filter::PlayerFilter;
use crate::core::player::Player;
use crate::core::query::PageRequest;
use anyhow::Result;
use async_trait::async_trait;

/// Persistence backend for players
///
/// The service is agnostic to the storage mechanism. Implementations only
/// have to store, retrieve and query records; validation and level
/// derivation happen before a record reaches the store.
#[async_trait]
pub trait PlayerStore: Send + Sync {
    /// Insert a new player and return it with its assigned id
    async fn insert(&self, player: Player) -> Result<Player>;

    /// Get a player by id
    async fn get(&self, id: i64) -> Result<Option<Player>>;

    /// Check whether a player exists
    async fn exists(&self, id: i64) -> Result<bool>;

    /// Overwrite an existing player
    async fn save(&self, player: Player) -> Result<Player>;

    /// Delete a player, absent ids are a no-op
    async fn delete(&self, id: i64) -> Result<()>;

    /// Players matching `filter`, ordered and sliced according to `page`
    async fn find_page(&self, filter: &PlayerFilter, page: &PageRequest) -> Result<Vec<Player>>;

    /// Number of players matching `filter`
    async fn count(&self, filter: &PlayerFilter) -> Result<usize>;
}
