use super::*;
use serial_test::serial;
use std::env;

fn clear_env() {
    unsafe {
        env::remove_var(API_URL_ENV);
        env::remove_var(TIMEOUT_ENV);
        env::remove_var(TOKEN_ENV);
    }
}

#[test]
#[serial]
fn test_defaults_without_env() {
    clear_env();

    let config = ProbeConfig::new();

    assert_eq!(config.api_url, "http://127.0.0.1:8000");
    assert_eq!(config.timeout, Duration::from_secs(10));
    assert!(config.token.is_none());
}

#[test]
#[serial]
fn test_env_vars_are_read() {
    clear_env();
    unsafe {
        env::set_var(API_URL_ENV, "http://sessions.local:9000");
        env::set_var(TIMEOUT_ENV, "3");
        env::set_var(TOKEN_ENV, "from-env");
    }

    let config = ProbeConfig::new();

    assert_eq!(config.api_url, "http://sessions.local:9000");
    assert_eq!(config.timeout, Duration::from_secs(3));
    assert_eq!(config.token, Some(SessionToken::new("from-env")));

    clear_env();
}

#[test]
#[serial]
fn test_flags_override_env() {
    clear_env();
    unsafe {
        env::set_var(API_URL_ENV, "http://env:1");
        env::set_var(TOKEN_ENV, "env-token");
    }

    let config = ProbeConfig::new()
        .with_api_url(Some("http://flag:2".to_string()))
        .with_timeout_secs(Some(1))
        .with_token(Some("flag-token".to_string()));

    assert_eq!(config.api_url, "http://flag:2", "CLI flag should override env var");
    assert_eq!(config.timeout, Duration::from_secs(1));
    assert_eq!(config.token, Some(SessionToken::new("flag-token")));

    clear_env();
}

#[test]
#[serial]
fn test_absent_flags_keep_env() {
    clear_env();
    unsafe {
        env::set_var(API_URL_ENV, "http://env:1");
    }

    let config = ProbeConfig::new().with_api_url(None).with_token(None);

    assert_eq!(config.api_url, "http://env:1");
    assert!(config.token.is_none());

    clear_env();
}

#[test]
#[serial]
fn test_bad_timeout_falls_back_to_default() {
    clear_env();
    for bad in ["soon", "0", ""] {
        unsafe {
            env::set_var(TIMEOUT_ENV, bad);
        }
        assert_eq!(
            ProbeConfig::new().timeout,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            "value {:?} should fall back",
            bad
        );
    }
    clear_env();
}

#[test]
#[serial]
fn test_blank_api_url_falls_back_to_default() {
    clear_env();
    unsafe {
        env::set_var(API_URL_ENV, "   ");
    }

    assert_eq!(ProbeConfig::new().api_url, DEFAULT_API_URL);

    clear_env();
}

#[test]
#[serial]
fn test_zero_timeout_flag_keeps_default() {
    clear_env();

    let config = ProbeConfig::new().with_timeout_secs(Some(0));
    assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));

    let config = ProbeConfig::new().with_timeout_secs(Some(4));
    assert_eq!(config.timeout, Duration::from_secs(4));
}
