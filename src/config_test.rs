use super::*;

/// # Safety
/// Only `from_env_uses_defaults` touches these variables; every other test
/// in this crate uses its own uniquely named keys, so no other test races it.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("AUTH_API_URL");
        std::env::remove_var("PROXY_TIMEOUT_SECS");
    }
}

#[test]
fn from_env_uses_defaults() {
    unsafe { clear_server_env() };

    let cfg = Config::from_env().unwrap();
    assert_eq!(
        cfg,
        Config {
            port: DEFAULT_PORT,
            auth_api_url: DEFAULT_AUTH_API_URL.to_owned(),
            proxy_timeout_secs: DEFAULT_PROXY_TIMEOUT_SECS,
        }
    );
}

#[test]
fn parse_port_accepts_valid_and_rejects_garbage() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some(" 8080 ")), Ok(8080));
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort("http".to_owned())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".to_owned())));
}

#[test]
fn parse_auth_api_url_trims_trailing_slash() {
    assert_eq!(
        parse_auth_api_url(Some("https://auth.example.test/")),
        Ok("https://auth.example.test".to_owned())
    );
    assert_eq!(parse_auth_api_url(None), Ok(DEFAULT_AUTH_API_URL.to_owned()));
}

#[test]
fn parse_auth_api_url_requires_http_scheme() {
    assert!(matches!(
        parse_auth_api_url(Some("auth.example.test")),
        Err(ConfigError::InvalidAuthApiUrl(_))
    ));
}

#[test]
fn env_parse_u64_falls_back_on_invalid() {
    let key = "__TEST_STREAMIFY_TIMEOUT_731__";
    unsafe { std::env::set_var(key, "soon") };
    assert_eq!(env_parse_u64(key, 30), 30);
    unsafe { std::env::set_var(key, " 5 ") };
    assert_eq!(env_parse_u64(key, 30), 5);
    unsafe { std::env::remove_var(key) };
}
