//! Tests for the typed error handling system
//!
//! These tests verify that:
//! - Errors return correct HTTP status codes
//! - Error responses are properly formatted
//! - Error conversions work correctly
//! - Error matching allows clients to handle specific cases

use axum::body::to_bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use players::prelude::*;
use serde_json::Value;

// =============================================================================
// HTTP Status Code Tests
// =============================================================================

mod status_code_tests {
    use super::*;

    #[test]
    fn test_invalid_field_returns_400() {
        let err = PlayerError::invalid("name", "too long");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_returns_404() {
        let err = PlayerError::NotFound { id: 12 };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_storage_error_returns_500() {
        let err = PlayerError::Storage(anyhow::anyhow!("disk on fire"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

// =============================================================================
// Error Code Tests
// =============================================================================

mod error_code_tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            PlayerError::invalid("title", "empty").error_code(),
            "INVALID_FIELD"
        );
        assert_eq!(
            PlayerError::NotFound { id: 1 }.error_code(),
            "PLAYER_NOT_FOUND"
        );
        assert_eq!(
            PlayerError::Storage(anyhow::anyhow!("boom")).error_code(),
            "STORAGE_ERROR"
        );
    }
}

// =============================================================================
// Error Response Format Tests
// =============================================================================

mod response_format_tests {
    use super::*;

    #[test]
    fn test_invalid_field_response_names_field() {
        let response = PlayerError::invalid("experience", "must be between 0 and 10000000")
            .to_response();

        assert_eq!(response.code, "INVALID_FIELD");
        assert!(response.message.contains("experience"));
        assert_eq!(
            response.details,
            Some(serde_json::json!({ "field": "experience" }))
        );
    }

    #[test]
    fn test_not_found_response_names_id() {
        let response = PlayerError::NotFound { id: 42 }.to_response();

        assert_eq!(response.code, "PLAYER_NOT_FOUND");
        assert!(response.message.contains("42"));
        assert_eq!(response.details, Some(serde_json::json!({ "id": 42 })));
    }

    #[test]
    fn test_storage_response_has_no_details() {
        let response = PlayerError::Storage(anyhow::anyhow!("connection reset")).to_response();

        assert_eq!(response.code, "STORAGE_ERROR");
        assert!(response.details.is_none());

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("details").is_none());
    }

    #[tokio::test]
    async fn test_into_response_writes_status_and_body() {
        let response = PlayerError::invalid("birthday", "out of range").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], "INVALID_FIELD");
        assert_eq!(body["details"]["field"], "birthday");
    }
}

// =============================================================================
// Conversion Tests
// =============================================================================

mod conversion_tests {
    use super::*;

    #[test]
    fn test_from_invalid_field() {
        let err: PlayerError = InvalidField::new("race", "is required").into();
        match err {
            PlayerError::InvalidField(invalid) => {
                assert_eq!(invalid.field, "race");
                assert_eq!(invalid.message, "is required");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_from_anyhow() {
        let err: PlayerError = anyhow::anyhow!("lock poisoned").into();
        assert!(matches!(err, PlayerError::Storage(_)));
        assert_eq!(err.to_string(), "lock poisoned");
    }

    fn fallible_validation() -> PlayerResult<()> {
        let checked: Result<(), InvalidField> = Err(InvalidField::new("name", "too long"));
        checked?;
        Ok(())
    }

    #[test]
    fn test_question_mark_conversion() {
        let result = fallible_validation();
        assert!(matches!(result, Err(PlayerError::InvalidField(_))));
    }
}

// =============================================================================
// Error Matching Tests
// =============================================================================

mod matching_tests {
    use super::*;

    fn describe(err: &PlayerError) -> String {
        match err {
            PlayerError::InvalidField(invalid) => format!("fix {}", invalid.field),
            PlayerError::NotFound { id } => format!("missing {}", id),
            PlayerError::Storage(_) => "retry".to_string(),
        }
    }

    #[test]
    fn test_clients_can_match_on_variants() {
        assert_eq!(describe(&PlayerError::invalid("title", "empty")), "fix title");
        assert_eq!(describe(&PlayerError::NotFound { id: 3 }), "missing 3");
        assert_eq!(
            describe(&PlayerError::Storage(anyhow::anyhow!("io"))),
            "retry"
        );
    }

    #[test]
    fn test_identifier_errors() {
        for raw in [None, Some(""), Some("0"), Some("abc"), Some("1e3")] {
            let result = PlayerService::parse_identifier(raw);
            match result {
                Err(PlayerError::InvalidField(invalid)) => assert_eq!(invalid.field, "id"),
                other => panic!("expected InvalidField for {:?}, got {:?}", raw, other),
            }
        }

        assert_eq!(PlayerService::parse_identifier(Some("17")).unwrap(), 17);
        assert_eq!(PlayerService::parse_identifier(Some("-4")).unwrap(), -4);
    }
}
