//! Tests for QnaError

use super::*;
use proptest::prelude::*;

#[test]
fn test_transport_error_display() {
    let err = QnaError::Transport("connection refused".to_string());
    assert_eq!(err.to_string(), "Network error: connection refused");
}

#[test]
fn test_status_error_display() {
    let err = QnaError::Status {
        code: 500,
        message: "Internal Server Error".to_string(),
    };
    assert_eq!(err.to_string(), "Service error (500): Internal Server Error");
}

#[test]
fn test_malformed_error_display() {
    let err = QnaError::MalformedResponse("expected value at line 1".to_string());
    assert_eq!(
        err.to_string(),
        "Unexpected response: expected value at line 1"
    );
}

#[test]
fn test_user_message_has_prefix() {
    let err = QnaError::Transport("dns failure".to_string());
    assert_eq!(err.user_message(), "Request failed: Network error: dns failure");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Every error variant yields a non-empty, prefixed user message
    #[test]
    fn prop_user_message_never_empty(
        message in ".{0,80}",
        code in 100u16..600u16,
        variant in 0usize..3,
    ) {
        let err = match variant {
            0 => QnaError::Transport(message),
            1 => QnaError::Status { code, message },
            _ => QnaError::MalformedResponse(message),
        };

        let text = err.user_message();
        prop_assert!(text.starts_with(ERROR_TURN_PREFIX));
        prop_assert!(text.len() > ERROR_TURN_PREFIX.len());
    }
}
