//! The player record and its wire types

use crate::core::level::Progress;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Character race
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Race {
    Human,
    Dwarf,
    Elf,
    Giant,
    Orc,
    Troll,
    Hobbit,
}

/// Character profession
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Profession {
    Warrior,
    Rogue,
    Sorcerer,
    Cleric,
    Paladin,
    Nazgul,
    Warlock,
    Druid,
}

/// A stored game character
///
/// `experience`, `level` and `until_next_level` are only reachable through
/// accessors: changing the experience always goes through
/// [`Player::set_experience`], which recomputes the derived fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    id: i64,
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub birthday: DateTime<Utc>,
    pub banned: bool,
    experience: i64,
    level: i64,
    until_next_level: i64,
}

impl Player {
    /// Store-assigned identifier, `0` until the player has been inserted
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn experience(&self) -> i64 {
        self.experience
    }

    pub fn level(&self) -> i64 {
        self.level
    }

    pub fn until_next_level(&self) -> i64 {
        self.until_next_level
    }

    /// Attach the identifier chosen by the store
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Replace the experience and re-derive level progression
    pub fn set_experience(&mut self, experience: i64) {
        self.experience = experience;
        self.refresh_progress();
    }

    /// Re-derive `level` and `until_next_level` from the current experience
    pub fn refresh_progress(&mut self) {
        let progress = Progress::from_experience(self.experience);
        self.level = progress.level;
        self.until_next_level = progress.until_next_level;
    }
}

/// A fully validated player that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlayer {
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    pub birthday: DateTime<Utc>,
    pub banned: bool,
    pub experience: i64,
}

impl From<NewPlayer> for Player {
    fn from(new: NewPlayer) -> Self {
        let progress = Progress::from_experience(new.experience);
        Self {
            id: 0,
            name: new.name,
            title: new.title,
            race: new.race,
            profession: new.profession,
            birthday: new.birthday,
            banned: new.banned,
            experience: new.experience,
            level: progress.level,
            until_next_level: progress.until_next_level,
        }
    }
}

/// Request body for create and update
///
/// Every attribute is optional so the same payload serves full creation and
/// partial updates. An explicit `null` is indistinguishable from an omitted
/// field. `id`, `level` and `untilNextLevel` are not part of the payload, so
/// caller-supplied values for them are dropped during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub race: Option<Race>,
    #[serde(default)]
    pub profession: Option<Profession>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub birthday: Option<DateTime<Utc>>,
    #[serde(default)]
    pub banned: Option<bool>,
    #[serde(default)]
    pub experience: Option<i64>,
}

/// Sort orders accepted by the listing endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerOrder {
    #[default]
    Id,
    Name,
    Experience,
    Birthday,
    Level,
}

impl PlayerOrder {
    /// Name of the attribute this order sorts on
    pub fn field_name(self) -> &'static str {
        match self {
            PlayerOrder::Id => "id",
            PlayerOrder::Name => "name",
            PlayerOrder::Experience => "experience",
            PlayerOrder::Birthday => "birthday",
            PlayerOrder::Level => "level",
        }
    }

    /// Ascending comparison on the order's attribute, ties broken by id
    pub fn compare(self, a: &Player, b: &Player) -> Ordering {
        let primary = match self {
            PlayerOrder::Id => Ordering::Equal,
            PlayerOrder::Name => a.name.cmp(&b.name),
            PlayerOrder::Experience => a.experience.cmp(&b.experience),
            PlayerOrder::Birthday => a.birthday.cmp(&b.birthday),
            PlayerOrder::Level => a.level.cmp(&b.level),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn sample() -> NewPlayer {
        NewPlayer {
            name: "Ilvaran".to_string(),
            title: "Keeper of the Gate".to_string(),
            race: Race::Elf,
            profession: Profession::Druid,
            birthday: Utc.with_ymd_and_hms(2010, 5, 17, 0, 0, 0).unwrap(),
            banned: false,
            experience: 300,
        }
    }

    #[test]
    fn test_new_player_derives_progress() {
        let player = Player::from(sample());
        assert_eq!(player.id(), 0);
        assert_eq!(player.level(), 2);
        assert_eq!(player.until_next_level(), 300);
    }

    #[test]
    fn test_set_experience_recomputes() {
        let mut player = Player::from(sample());
        player.set_experience(5_000);
        assert_eq!(player.experience(), 5_000);
        assert_eq!(player.level(), 9);
        assert_eq!(player.until_next_level(), 500);
    }

    #[test]
    fn test_player_serializes_camel_case_with_millis() {
        let player = Player::from(sample()).with_id(12);
        let value = serde_json::to_value(&player).unwrap();
        assert_eq!(value["id"], 12);
        assert_eq!(value["race"], "ELF");
        assert_eq!(value["profession"], "DRUID");
        assert_eq!(value["untilNextLevel"], 300);
        assert_eq!(value["birthday"], 1_274_054_400_000_i64);
    }

    #[test]
    fn test_payload_ignores_derived_fields() {
        let payload: PlayerPayload = serde_json::from_value(json!({
            "name": "Bob",
            "level": 99,
            "untilNextLevel": 1,
            "id": 5
        }))
        .unwrap();
        assert_eq!(payload.name.as_deref(), Some("Bob"));
        assert!(payload.experience.is_none());
    }

    #[test]
    fn test_payload_null_equals_absent() {
        let payload: PlayerPayload =
            serde_json::from_value(json!({ "title": null, "birthday": null })).unwrap();
        assert_eq!(payload, PlayerPayload::default());
    }

    #[test]
    fn test_payload_rejects_unknown_race() {
        let result = serde_json::from_value::<PlayerPayload>(json!({ "race": "DRAGON" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_order_compare_breaks_ties_by_id() {
        let a = Player::from(sample()).with_id(2);
        let b = Player::from(sample()).with_id(1);
        assert_eq!(PlayerOrder::Name.compare(&a, &b), Ordering::Greater);
        assert_eq!(PlayerOrder::default().field_name(), "id");
    }
}
