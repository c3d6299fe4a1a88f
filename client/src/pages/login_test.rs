use super::*;

#[test]
fn email_input_updates_only_email() {
    let mut form = LoginRequest { email: String::new(), password: "keep".to_owned() };
    apply_login_input(&mut form, LoginField::Email, "a@b.com".to_owned());
    assert_eq!(form, LoginRequest { email: "a@b.com".to_owned(), password: "keep".to_owned() });
}

#[test]
fn password_input_updates_only_password() {
    let mut form = LoginRequest { email: "a@b.com".to_owned(), password: String::new() };
    apply_login_input(&mut form, LoginField::Password, "secret".to_owned());
    assert_eq!(form, LoginRequest { email: "a@b.com".to_owned(), password: "secret".to_owned() });
}

#[test]
fn input_is_stored_verbatim() {
    let mut form = LoginRequest::default();
    apply_login_input(&mut form, LoginField::Email, "  Mixed@Case.com ".to_owned());
    assert_eq!(form.email, "  Mixed@Case.com ");
}

#[test]
fn successive_keystrokes_replace_the_value() {
    let mut form = LoginRequest::default();
    for typed in ["h", "he", "hel"] {
        apply_login_input(&mut form, LoginField::Password, typed.to_owned());
    }
    assert_eq!(form.password, "hel");
    assert!(form.email.is_empty());
}
