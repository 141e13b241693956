//! Composable search predicates over players
//!
//! Every criterion is handled by its own fragment factory which returns
//! `None` when its parameter is absent, or a boxed test otherwise. A
//! [`PlayerFilter`] AND-folds whatever fragments are present; with no
//! fragments at all it matches every player.
//!
//! ```rust,ignore
//! let filter = PlayerFilter::all()
//!     .and(name_contains(Some("ar".into())))
//!     .and(race_is(Some(Race::Elf)))
//!     .and(experience_between(Some(1_000), None));
//!
//! let hits: Vec<_> = players.iter().filter(|p| filter.matches(p)).collect();
//! ```

use crate::core::player::{Player, Profession, Race};
use chrono::{DateTime, Utc};
use std::fmt;

/// A single predicate fragment
pub type Fragment = Box<dyn Fn(&Player) -> bool + Send + Sync>;

/// Conjunction of predicate fragments
#[derive(Default)]
pub struct PlayerFilter {
    fragments: Vec<Fragment>,
}

impl PlayerFilter {
    /// The universal filter, matching every player
    pub fn all() -> Self {
        Self::default()
    }

    /// Add a fragment to the conjunction, `None` adds no constraint
    pub fn and(mut self, fragment: Option<Fragment>) -> Self {
        if let Some(fragment) = fragment {
            self.fragments.push(fragment);
        }
        self
    }

    /// AND-fold a sequence of optional fragments
    pub fn compose(fragments: impl IntoIterator<Item = Option<Fragment>>) -> Self {
        fragments.into_iter().fold(Self::all(), Self::and)
    }

    pub fn matches(&self, player: &Player) -> bool {
        self.fragments.iter().all(|fragment| fragment(player))
    }

    /// Number of active constraints
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

impl fmt::Debug for PlayerFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerFilter")
            .field("fragments", &self.fragments.len())
            .finish()
    }
}

/// Three-way range policy shared by every range criterion
///
/// Neither bound gives no constraint, one bound gives a one-sided inclusive
/// comparison, both bounds give an inclusive range.
fn within<T, F>(min: Option<T>, max: Option<T>, attribute: F) -> Option<Fragment>
where
    T: PartialOrd + Copy + Send + Sync + 'static,
    F: Fn(&Player) -> T + Send + Sync + 'static,
{
    match (min, max) {
        (None, None) => None,
        (Some(min), None) => Some(Box::new(move |p: &Player| attribute(p) >= min)),
        (None, Some(max)) => Some(Box::new(move |p: &Player| attribute(p) <= max)),
        (Some(min), Some(max)) => Some(Box::new(move |p: &Player| {
            let value = attribute(p);
            min <= value && value <= max
        })),
    }
}

/// Case-sensitive substring match on the name
pub fn name_contains(name: Option<String>) -> Option<Fragment> {
    name.map(|needle| -> Fragment { Box::new(move |p: &Player| p.name.contains(needle.as_str())) })
}

/// Case-sensitive substring match on the title
pub fn title_contains(title: Option<String>) -> Option<Fragment> {
    title.map(|needle| -> Fragment { Box::new(move |p: &Player| p.title.contains(needle.as_str())) })
}

pub fn race_is(race: Option<Race>) -> Option<Fragment> {
    race.map(|race| -> Fragment { Box::new(move |p: &Player| p.race == race) })
}

pub fn profession_is(profession: Option<Profession>) -> Option<Fragment> {
    profession.map(|profession| -> Fragment { Box::new(move |p: &Player| p.profession == profession) })
}

pub fn banned_is(banned: Option<bool>) -> Option<Fragment> {
    banned.map(|banned| -> Fragment { Box::new(move |p: &Player| p.banned == banned) })
}

pub fn experience_between(min: Option<i64>, max: Option<i64>) -> Option<Fragment> {
    within(min, max, Player::experience)
}

pub fn level_between(min: Option<i64>, max: Option<i64>) -> Option<Fragment> {
    within(min, max, Player::level)
}

pub fn birthday_between(
    after: Option<DateTime<Utc>>,
    before: Option<DateTime<Utc>>,
) -> Option<Fragment> {
    within(after, before, |p: &Player| p.birthday)
}

/// Every supported search criterion, each independently optional
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerCriteria {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    pub after: Option<DateTime<Utc>>,
    pub before: Option<DateTime<Utc>>,
    pub banned: Option<bool>,
    pub min_experience: Option<i64>,
    pub max_experience: Option<i64>,
    pub min_level: Option<i64>,
    pub max_level: Option<i64>,
}

impl PlayerCriteria {
    /// Build the conjunction of every present criterion
    pub fn to_filter(&self) -> PlayerFilter {
        PlayerFilter::compose([
            name_contains(self.name.clone()),
            title_contains(self.title.clone()),
            race_is(self.race),
            profession_is(self.profession),
            birthday_between(self.after, self.before),
            banned_is(self.banned),
            experience_between(self.min_experience, self.max_experience),
            level_between(self.min_level, self.max_level),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::NewPlayer;
    use chrono::TimeZone;

    fn player(id: i64, name: &str, race: Race, experience: i64, year: i32) -> Player {
        Player::from(NewPlayer {
            name: name.to_string(),
            title: format!("{} the Bold", name),
            race,
            profession: Profession::Warrior,
            birthday: Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap(),
            banned: id % 2 == 0,
            experience,
        })
        .with_id(id)
    }

    fn fixtures() -> Vec<Player> {
        vec![
            player(1, "Arwen", Race::Elf, 0, 2001),
            player(2, "Gimli", Race::Dwarf, 100, 2005),
            player(3, "Aragorn", Race::Human, 300, 2010),
            player(4, "Legolas", Race::Elf, 5_000, 2020),
        ]
    }

    fn ids(filter: &PlayerFilter) -> Vec<i64> {
        fixtures()
            .iter()
            .filter(|p| filter.matches(p))
            .map(Player::id)
            .collect()
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = PlayerCriteria::default().to_filter();
        assert!(filter.is_empty());
        assert_eq!(ids(&filter), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_name_is_case_sensitive_substring() {
        assert!(ids(&PlayerFilter::all().and(name_contains(Some("ar".into())))).is_empty());
        assert_eq!(ids(&PlayerFilter::all().and(name_contains(Some("or".into())))), vec![3]);
        assert_eq!(ids(&PlayerFilter::all().and(name_contains(Some("Ar".into())))), vec![1, 3]);
    }

    #[test]
    fn test_title_substring() {
        let filter = PlayerFilter::all().and(title_contains(Some("the Bold".into())));
        assert_eq!(ids(&filter), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_equality_fragments() {
        assert_eq!(ids(&PlayerFilter::all().and(race_is(Some(Race::Elf)))), vec![1, 4]);
        assert_eq!(ids(&PlayerFilter::all().and(banned_is(Some(true)))), vec![2, 4]);
        assert_eq!(ids(&PlayerFilter::all().and(banned_is(Some(false)))), vec![1, 3]);
        assert!(ids(&PlayerFilter::all().and(profession_is(Some(Profession::Druid)))).is_empty());
    }

    #[test]
    fn test_experience_range_policy() {
        assert!(experience_between(None, None).is_none());
        assert_eq!(ids(&PlayerFilter::all().and(experience_between(Some(100), None))), vec![2, 3, 4]);
        assert_eq!(ids(&PlayerFilter::all().and(experience_between(None, Some(100)))), vec![1, 2]);
        assert_eq!(
            ids(&PlayerFilter::all().and(experience_between(Some(100), Some(300)))),
            vec![2, 3]
        );
    }

    #[test]
    fn test_level_range_policy() {
        // levels: 0, 1, 2, 9
        assert!(level_between(None, None).is_none());
        assert_eq!(ids(&PlayerFilter::all().and(level_between(Some(2), None))), vec![3, 4]);
        assert_eq!(ids(&PlayerFilter::all().and(level_between(None, Some(1)))), vec![1, 2]);
        assert_eq!(ids(&PlayerFilter::all().and(level_between(Some(1), Some(2)))), vec![2, 3]);
    }

    #[test]
    fn test_birthday_range_policy() {
        let y2005 = Utc.with_ymd_and_hms(2005, 1, 1, 0, 0, 0).unwrap();
        let y2010 = Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap();
        assert!(birthday_between(None, None).is_none());
        assert_eq!(ids(&PlayerFilter::all().and(birthday_between(Some(y2005), None))), vec![2, 3, 4]);
        assert_eq!(ids(&PlayerFilter::all().and(birthday_between(None, Some(y2005)))), vec![1, 2]);
        assert_eq!(
            ids(&PlayerFilter::all().and(birthday_between(Some(y2005), Some(y2010)))),
            vec![2, 3]
        );
    }

    #[test]
    fn test_criteria_conjunction() {
        let criteria = PlayerCriteria {
            race: Some(Race::Elf),
            min_experience: Some(1),
            ..Default::default()
        };
        let filter = criteria.to_filter();
        assert_eq!(filter.len(), 2);
        assert_eq!(ids(&filter), vec![4]);
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let filter = PlayerFilter::all().and(experience_between(Some(300), Some(100)));
        assert!(ids(&filter).is_empty());
    }
}
