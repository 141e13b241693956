//! Reusable field validators
//!
//! Each factory returns a closure taking the wire name of the field and the
//! value to check. Player rules in [`super::rules`] are assembled from these.

use crate::core::error::InvalidField;
use chrono::{DateTime, Utc};

/// Validator: field must be present, yields the inner value
pub fn required<T>(field: &str, value: Option<T>) -> Result<T, InvalidField> {
    value.ok_or_else(|| InvalidField::new(field, "is required"))
}

/// Validator: string length (in characters) must be within range
pub fn string_length(
    min: usize,
    max: usize,
) -> impl Fn(&str, &str) -> Result<(), InvalidField> + Send + Sync + Clone {
    move |field: &str, value: &str| {
        let len = value.chars().count();
        if len < min {
            Err(InvalidField::new(
                field,
                format!("must have at least {} characters (got {})", min, len),
            ))
        } else if len > max {
            Err(InvalidField::new(
                field,
                format!("must not exceed {} characters (got {})", max, len),
            ))
        } else {
            Ok(())
        }
    }
}

/// Validator: integer must lie within the inclusive range
pub fn int_range(
    min: i64,
    max: i64,
) -> impl Fn(&str, i64) -> Result<(), InvalidField> + Send + Sync + Clone {
    move |field: &str, value: i64| {
        if (min..=max).contains(&value) {
            Ok(())
        } else {
            Err(InvalidField::new(
                field,
                format!("must be between {} and {} (got {})", min, max, value),
            ))
        }
    }
}

/// Validator: point in time must lie within the inclusive range
pub fn date_range(
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> impl Fn(&str, &DateTime<Utc>) -> Result<(), InvalidField> + Send + Sync + Clone {
    move |field: &str, value: &DateTime<Utc>| {
        if *value < from || *value > to {
            Err(InvalidField::new(
                field,
                format!(
                    "must be between {} and {} (got {})",
                    from.to_rfc3339(),
                    to.to_rfc3339(),
                    value.to_rfc3339()
                ),
            ))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    // === required() ===

    #[test]
    fn test_required_none_returns_error() {
        let result = required::<i64>("experience", None);
        let err = result.unwrap_err();
        assert_eq!(err.field, "experience");
        assert!(err.message.contains("required"));
    }

    #[test]
    fn test_required_some_yields_value() {
        assert_eq!(required("experience", Some(12)), Ok(12));
    }

    // === string_length() ===

    #[test]
    fn test_string_length_empty_returns_error() {
        let v = string_length(1, 12);
        let err = v("name", "").unwrap_err();
        assert!(err.message.contains("at least 1"));
    }

    #[test]
    fn test_string_length_too_long_returns_error() {
        let v = string_length(1, 5);
        let err = v("name", "abcdef").unwrap_err();
        assert!(err.message.contains("exceed 5"));
    }

    #[test]
    fn test_string_length_exact_max_returns_ok() {
        let v = string_length(1, 5);
        assert!(v("name", "abcde").is_ok());
    }

    #[test]
    fn test_string_length_counts_characters_not_bytes() {
        let v = string_length(1, 5);
        assert!(v("name", "ÉÉÉÉÉ").is_ok());
    }

    // === int_range() ===

    #[test]
    fn test_int_range_bounds_inclusive() {
        let v = int_range(0, 10);
        assert!(v("experience", 0).is_ok());
        assert!(v("experience", 10).is_ok());
        assert!(v("experience", -1).is_err());
        assert!(v("experience", 11).is_err());
    }

    // === date_range() ===

    #[test]
    fn test_date_range_bounds_inclusive() {
        let from = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(3000, 12, 31, 0, 0, 0).unwrap();
        let v = date_range(from, to);
        assert!(v("birthday", &from).is_ok());
        assert!(v("birthday", &to).is_ok());
        assert!(v("birthday", &(from - chrono::Duration::milliseconds(1))).is_err());
        assert!(v("birthday", &(to + chrono::Duration::milliseconds(1))).is_err());
    }
}
