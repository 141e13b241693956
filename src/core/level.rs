//! Level progression derived from experience
//!
//! A player's level and the experience still missing to reach the next level
//! are never stored independently: they are a pure function of the
//! experience value and are recomputed on every write.

/// Lowest accepted experience value
pub const MIN_EXPERIENCE: i64 = 0;

/// Highest accepted experience value
pub const MAX_EXPERIENCE: i64 = 10_000_000;

/// Level reached with the given amount of experience
///
/// `floor((sqrt(2500 + 200 * experience) - 50) / 100)`, evaluated with an
/// exact integer square root. Negative experience is treated as zero.
/// Intermediates are widened to `i128`, so every `i64` input is accepted.
pub fn level(experience: i64) -> i64 {
    // at most ~4.3e8 for i64::MAX
    i64::try_from(wide_level(experience)).unwrap_or(i64::MAX)
}

/// Experience missing until the level after `level(experience)`
///
/// `50 * (level + 1) * (level + 2) - experience`
pub fn until_next_level(experience: i64) -> i64 {
    let level = wide_level(experience);
    let experience = i128::from(experience.max(0));
    i64::try_from(50 * (level + 1) * (level + 2) - experience).unwrap_or(i64::MAX)
}

fn wide_level(experience: i64) -> i128 {
    let experience = i128::from(experience.max(0));
    ((2_500 + 200 * experience).isqrt() - 50) / 100
}

/// Both derived values for one experience amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub level: i64,
    pub until_next_level: i64,
}

impl Progress {
    pub fn from_experience(experience: i64) -> Self {
        Self {
            level: level(experience),
            until_next_level: until_next_level(experience),
        }
    }
}
