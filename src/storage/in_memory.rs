//! In-memory implementation of PlayerStore for testing and development

use crate::core::filter::PlayerFilter;
use crate::core::player::Player;
use crate::core::query::PageRequest;
use crate::core::store::PlayerStore;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

/// In-memory player store
///
/// Useful for testing and development. Uses RwLock for thread-safe access
/// and hands out ids from an increasing sequence starting at 1.
#[derive(Clone)]
pub struct InMemoryPlayerStore {
    players: Arc<RwLock<BTreeMap<i64, Player>>>,
    sequence: Arc<AtomicI64>,
}

impl InMemoryPlayerStore {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self {
            players: Arc::new(RwLock::new(BTreeMap::new())),
            sequence: Arc::new(AtomicI64::new(0)),
        }
    }

    fn next_id(&self) -> i64 {
        self.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }
}

impl Default for InMemoryPlayerStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlayerStore for InMemoryPlayerStore {
    async fn insert(&self, player: Player) -> Result<Player> {
        let mut players = self
            .players
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let player = player.with_id(self.next_id());
        players.insert(player.id(), player.clone());

        Ok(player)
    }

    async fn get(&self, id: i64) -> Result<Option<Player>> {
        let players = self
            .players
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(players.get(&id).cloned())
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        let players = self
            .players
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(players.contains_key(&id))
    }

    async fn save(&self, player: Player) -> Result<Player> {
        let mut players = self
            .players
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let slot = players
            .get_mut(&player.id())
            .ok_or_else(|| anyhow!("Player {} not stored", player.id()))?;
        *slot = player.clone();

        Ok(player)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut players = self
            .players
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        players.remove(&id);

        Ok(())
    }

    async fn find_page(&self, filter: &PlayerFilter, page: &PageRequest) -> Result<Vec<Player>> {
        let players = self
            .players
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        let mut matching: Vec<&Player> = players.values().filter(|p| filter.matches(p)).collect();
        matching.sort_by(|a, b| page.order.compare(a, b));

        Ok(matching
            .into_iter()
            .skip(page.offset())
            .take(page.size)
            .cloned()
            .collect())
    }

    async fn count(&self, filter: &PlayerFilter) -> Result<usize> {
        let players = self
            .players
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(players.values().filter(|p| filter.matches(p)).count())
    }
}
