use super::*;

fn filled() -> SignupForm {
    SignupForm {
        full_name: "John Doe".to_owned(),
        email: "john@gmail.com".to_owned(),
        password: "hunter22".to_owned(),
        accepted_terms: true,
    }
}

#[test]
fn each_field_updates_independently() {
    let mut form = filled();
    form.apply_input(SignupField::FullName, "Jane Roe".to_owned());
    assert_eq!(form, SignupForm { full_name: "Jane Roe".to_owned(), ..filled() });

    let mut form = filled();
    form.apply_input(SignupField::Email, "jane@example.com".to_owned());
    assert_eq!(form, SignupForm { email: "jane@example.com".to_owned(), ..filled() });

    let mut form = filled();
    form.apply_input(SignupField::Password, "x".to_owned());
    assert_eq!(form, SignupForm { password: "x".to_owned(), ..filled() });
}

#[test]
fn to_request_carries_full_state_without_terms() {
    let req = filled().to_request();
    assert_eq!(
        req,
        SignupRequest {
            full_name: "John Doe".to_owned(),
            email: "john@gmail.com".to_owned(),
            password: "hunter22".to_owned(),
        }
    );
    let json = serde_json::to_value(&req).unwrap();
    assert!(json.get("acceptedTerms").is_none());
}

#[test]
fn short_password_is_not_rejected_locally() {
    let mut form = SignupForm::default();
    form.apply_input(SignupField::Password, "abc".to_owned());
    assert_eq!(form.to_request().password, "abc");
}

#[test]
fn default_form_is_empty() {
    let form = SignupForm::default();
    assert!(form.full_name.is_empty() && form.email.is_empty() && form.password.is_empty());
    assert!(!form.accepted_terms);
}

#[test]
fn password_hint_mentions_minimum_length() {
    assert!(PASSWORD_HINT.contains("6 characters"));
}
