use super::*;

#[test]
fn from_status_keeps_backend_message() {
    let err = ApiError::from_status(401, r#"{"message":"Invalid email or password"}"#);
    assert_eq!(
        err,
        ApiError::Status { status: 401, message: Some("Invalid email or password".to_owned()) }
    );
    assert_eq!(err.user_message(), "Invalid email or password");
}

#[test]
fn from_status_without_message_falls_back() {
    let err = ApiError::from_status(500, "{}");
    assert_eq!(err.server_message(), None);
    assert_eq!(err.user_message(), FALLBACK_ERROR_MESSAGE);
}

#[test]
fn from_status_with_non_json_body_falls_back() {
    let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
    assert_eq!(err, ApiError::Status { status: 502, message: None });
    assert_eq!(err.user_message(), FALLBACK_ERROR_MESSAGE);
}

#[test]
fn from_status_ignores_blank_message() {
    let err = ApiError::from_status(400, r#"{"message":"   "}"#);
    assert_eq!(err.user_message(), FALLBACK_ERROR_MESSAGE);
}

#[test]
fn network_and_decode_errors_use_fallback() {
    assert_eq!(ApiError::Network("offline".to_owned()).user_message(), FALLBACK_ERROR_MESSAGE);
    assert_eq!(ApiError::Decode("eof".to_owned()).user_message(), FALLBACK_ERROR_MESSAGE);
}

#[test]
fn display_formats_each_variant() {
    assert_eq!(ApiError::Network("offline".to_owned()).to_string(), "network error: offline");
    assert_eq!(ApiError::Status { status: 429, message: None }.to_string(), "request failed: 429");
    assert_eq!(ApiError::Decode("eof".to_owned()).to_string(), "invalid response: eof");
}
