use super::*;

#[test]
fn signup_request_serializes_full_name_as_camel_case() {
    let req = SignupRequest {
        full_name: "Jane Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        password: "hunter22".to_owned(),
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "fullName": "Jane Doe",
            "email": "jane@example.com",
            "password": "hunter22",
        })
    );
}

#[test]
fn login_request_serializes_only_credentials() {
    let req = LoginRequest { email: "a@b.com".to_owned(), password: "secret".to_owned() };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json, serde_json::json!({ "email": "a@b.com", "password": "secret" }));
}

#[test]
fn auth_response_parses_backend_user() {
    let raw = r#"{
        "success": true,
        "user": {
            "_id": "66f1",
            "fullName": "Jane Doe",
            "email": "jane@example.com",
            "profilePic": "https://avatar.example/1.png",
            "isOnboarded": true,
            "nativeLanguage": "english"
        }
    }"#;
    let resp: AuthResponse = serde_json::from_str(raw).unwrap();
    assert!(resp.success);
    assert_eq!(resp.user.id, "66f1");
    assert_eq!(resp.user.full_name, "Jane Doe");
    assert_eq!(resp.user.profile_pic.as_deref(), Some("https://avatar.example/1.png"));
    assert!(resp.user.is_onboarded);
}

#[test]
fn auth_user_optional_fields_default() {
    let raw = r#"{ "_id": "u1", "fullName": "Al", "email": "al@example.com" }"#;
    let user: AuthUser = serde_json::from_str(raw).unwrap();
    assert_eq!(user.profile_pic, None);
    assert!(!user.is_onboarded);
}

#[test]
fn error_body_tolerates_missing_message() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(body.message, None);
    let body: ErrorBody = serde_json::from_str(r#"{"message":"Invalid email or password"}"#).unwrap();
    assert_eq!(body.message.as_deref(), Some("Invalid email or password"));
}
