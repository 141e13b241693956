//! Player validation rules
//!
//! Full validation is used on creation, partial validation on update. Both
//! apply the same per-field rule; partial validation skips absent fields.

use super::validators::{date_range, int_range, required, string_length};
use crate::core::error::InvalidField;
use crate::core::level::{MAX_EXPERIENCE, MIN_EXPERIENCE};
use crate::core::player::{NewPlayer, PlayerPayload, Profession, Race};
use chrono::{DateTime, TimeZone, Utc};

pub const NAME_MAX_LEN: usize = 12;
pub const TITLE_MAX_LEN: usize = 30;

/// Earliest accepted birthday, 2000-01-01T00:00:00Z
pub fn earliest_birthday() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Latest accepted birthday, 3000-12-31T00:00:00Z
pub fn latest_birthday() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(3000, 12, 31, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

pub fn check_name(name: &str) -> Result<(), InvalidField> {
    string_length(1, NAME_MAX_LEN)("name", name)
}

pub fn check_title(title: &str) -> Result<(), InvalidField> {
    string_length(1, TITLE_MAX_LEN)("title", title)
}

pub fn check_experience(experience: i64) -> Result<(), InvalidField> {
    int_range(MIN_EXPERIENCE, MAX_EXPERIENCE)("experience", experience)
}

pub fn check_birthday(birthday: &DateTime<Utc>) -> Result<(), InvalidField> {
    date_range(earliest_birthday(), latest_birthday())("birthday", birthday)
}

/// Validate every attribute of a creation payload
///
/// `banned` defaults to `false` when absent.
pub fn validate_full(payload: PlayerPayload) -> Result<NewPlayer, InvalidField> {
    let name = required("name", payload.name)?;
    check_name(&name)?;

    let title = required("title", payload.title)?;
    check_title(&title)?;

    let race: Race = required("race", payload.race)?;
    let profession: Profession = required("profession", payload.profession)?;

    let experience = required("experience", payload.experience)?;
    check_experience(experience)?;

    let birthday = required("birthday", payload.birthday)?;
    check_birthday(&birthday)?;

    Ok(NewPlayer {
        name,
        title,
        race,
        profession,
        birthday,
        banned: payload.banned.unwrap_or(false),
        experience,
    })
}

/// Validate only the attributes present in an update payload
pub fn validate_partial(payload: &PlayerPayload) -> Result<(), InvalidField> {
    if let Some(name) = &payload.name {
        check_name(name)?;
    }
    if let Some(title) = &payload.title {
        check_title(title)?;
    }
    if let Some(experience) = payload.experience {
        check_experience(experience)?;
    }
    if let Some(birthday) = &payload.birthday {
        check_birthday(birthday)?;
    }
    // race and profession are closed enums: presence is the whole rule
    Ok(())
}
