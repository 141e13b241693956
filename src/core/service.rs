//! Player service: validation, level derivation and search around a store

use crate::core::error::{PlayerError, PlayerResult};
use crate::core::filter::PlayerFilter;
use crate::core::player::{Player, PlayerPayload};
use crate::core::query::PageRequest;
use crate::core::store::PlayerStore;
use crate::core::validation::{validate_full, validate_partial};
use std::sync::Arc;

/// Orchestrates every player operation
///
/// Validation always completes before the store is written, and the derived
/// level fields are recomputed on every write.
#[derive(Clone)]
pub struct PlayerService {
    store: Arc<dyn PlayerStore>,
}

impl PlayerService {
    pub fn new(store: Arc<dyn PlayerStore>) -> Self {
        Self { store }
    }

    /// Parse a raw path identifier
    ///
    /// Absent, empty, `"0"` and non-integer values are all invalid.
    pub fn parse_identifier(raw: Option<&str>) -> PlayerResult<i64> {
        let raw = match raw {
            None | Some("") | Some("0") => {
                return Err(PlayerError::invalid("id", "must be a non-zero integer"));
            }
            Some(raw) => raw,
        };
        raw.parse::<i64>()
            .map_err(|_| PlayerError::invalid("id", format!("'{}' is not an integer", raw)))
    }

    /// One ordered page of the players matching `filter`
    pub async fn list(&self, filter: &PlayerFilter, page: &PageRequest) -> PlayerResult<Vec<Player>> {
        tracing::debug!(
            constraints = filter.len(),
            page = page.number,
            size = page.size,
            order = page.order.field_name(),
            "listing players"
        );
        Ok(self.store.find_page(filter, page).await?)
    }

    /// Number of players matching `filter`
    pub async fn count(&self, filter: &PlayerFilter) -> PlayerResult<usize> {
        Ok(self.store.count(filter).await?)
    }

    pub async fn create(&self, payload: PlayerPayload) -> PlayerResult<Player> {
        let new_player = validate_full(payload).inspect_err(|invalid| {
            tracing::debug!(field = %invalid.field, "rejected player creation");
        })?;

        let player = self.store.insert(Player::from(new_player)).await?;
        tracing::info!(player_id = player.id(), level = player.level(), "player created");
        Ok(player)
    }

    pub async fn get(&self, id: i64) -> PlayerResult<Player> {
        self.store
            .get(id)
            .await?
            .ok_or(PlayerError::NotFound { id })
    }

    /// Apply the fields present in `payload` to an existing player
    ///
    /// Every present field is validated before any of them is applied.
    pub async fn update(&self, id: i64, payload: PlayerPayload) -> PlayerResult<Player> {
        let mut player = self.get(id).await?;

        validate_partial(&payload).inspect_err(|invalid| {
            tracing::debug!(player_id = id, field = %invalid.field, "rejected player update");
        })?;

        let PlayerPayload {
            name,
            title,
            race,
            profession,
            birthday,
            banned,
            experience,
        } = payload;

        if let Some(name) = name {
            player.name = name;
        }
        if let Some(title) = title {
            player.title = title;
        }
        if let Some(race) = race {
            player.race = race;
        }
        if let Some(profession) = profession {
            player.profession = profession;
        }
        if let Some(birthday) = birthday {
            player.birthday = birthday;
        }
        if let Some(banned) = banned {
            player.banned = banned;
        }
        match experience {
            Some(experience) => player.set_experience(experience),
            None => player.refresh_progress(),
        }

        let player = self.store.save(player).await?;
        tracing::info!(player_id = id, level = player.level(), "player updated");
        Ok(player)
    }

    pub async fn delete(&self, id: i64) -> PlayerResult<()> {
        if !self.store.exists(id).await? {
            return Err(PlayerError::NotFound { id });
        }
        self.store.delete(id).await?;
        tracing::info!(player_id = id, "player deleted");
        Ok(())
    }
}
