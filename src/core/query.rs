//! Query parameters and pagination utilities

use crate::config::PagingConfig;
use crate::core::error::InvalidField;
use crate::core::filter::PlayerCriteria;
use crate::core::player::{PlayerOrder, Profession, Race};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Query parameters of the listing and count endpoints
///
/// Every parameter is optional. Filters left out add no constraint, paging
/// parameters fall back to the configured defaults.
///
/// # Example
/// ```text
/// GET /rest/players?name=ar&race=ELF&minExperience=1000
/// GET /rest/players?after=946684800000&before=1262304000000&banned=false
/// GET /rest/players?order=LEVEL&pageNumber=2&pageSize=10
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerQuery {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,

    /// Lower birthday bound, epoch milliseconds
    pub after: Option<i64>,

    /// Upper birthday bound, epoch milliseconds
    pub before: Option<i64>,

    pub banned: Option<bool>,
    pub min_experience: Option<i64>,
    pub max_experience: Option<i64>,
    pub min_level: Option<i64>,
    pub max_level: Option<i64>,

    /// Sort order, `ID` when absent
    pub order: Option<PlayerOrder>,

    /// Zero-based page index
    pub page_number: Option<usize>,

    /// Number of players per page
    pub page_size: Option<usize>,
}

fn timestamp(field: &str, millis: Option<i64>) -> Result<Option<DateTime<Utc>>, InvalidField> {
    millis
        .map(|ms| {
            DateTime::from_timestamp_millis(ms)
                .ok_or_else(|| InvalidField::new(field, format!("timestamp {} out of range", ms)))
        })
        .transpose()
}

impl PlayerQuery {
    /// Extract the search criteria, converting timestamps to points in time
    pub fn criteria(&self) -> Result<PlayerCriteria, InvalidField> {
        Ok(PlayerCriteria {
            name: self.name.clone(),
            title: self.title.clone(),
            race: self.race,
            profession: self.profession,
            after: timestamp("after", self.after)?,
            before: timestamp("before", self.before)?,
            banned: self.banned,
            min_experience: self.min_experience,
            max_experience: self.max_experience,
            min_level: self.min_level,
            max_level: self.max_level,
        })
    }

    /// Resolve the requested page against the paging configuration
    ///
    /// A page size of zero is rejected, as is any size above the configured
    /// maximum when one is set.
    pub fn page_request(&self, paging: &PagingConfig) -> Result<PageRequest, InvalidField> {
        let size = self.page_size.unwrap_or(paging.default_page_size);
        if size == 0 {
            return Err(InvalidField::new("pageSize", "must be at least 1"));
        }

        if let Some(max) = paging.max_page_size.filter(|max| size > *max) {
            return Err(InvalidField::new(
                "pageSize",
                format!("must be at most {}", max),
            ));
        }

        Ok(PageRequest {
            number: self.page_number.unwrap_or(0),
            size,
            order: self.order.unwrap_or_default(),
        })
    }
}

/// One page of an ordered listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index
    pub number: usize,
    /// Page size, at least 1
    pub size: usize,
    pub order: PlayerOrder,
}

impl PageRequest {
    pub fn new(number: usize, size: usize, order: PlayerOrder) -> Self {
        Self {
            number,
            size: size.max(1),
            order,
        }
    }

    /// Number of records preceding this page
    pub fn offset(&self) -> usize {
        self.number.saturating_mul(self.size)
    }
}
