use std::env;
use std::time::Duration;

use chef_book::config::{API_KEY_VAR, BASE_URL_VAR, LEGACY_API_KEY_VAR, TIMEOUT_VAR};
use chef_book::{ApiKey, Config};
use pretty_assertions::assert_eq;
use serial_test::serial;

fn clear_env() {
    for var in [API_KEY_VAR, LEGACY_API_KEY_VAR, BASE_URL_VAR, TIMEOUT_VAR] {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults() {
    clear_env();

    let config = Config::from_env().unwrap();
    assert!(config.api_key.is_empty());
    assert_eq!(config.base_url, "https://api.spoonacular.com");
    assert_eq!(config.timeout, None);
}

#[test]
#[serial]
fn test_reads_all_variables() {
    clear_env();
    env::set_var(API_KEY_VAR, "primary");
    env::set_var(BASE_URL_VAR, "http://localhost:9000/");
    env::set_var(TIMEOUT_VAR, " 15 ");

    let config = Config::from_env().unwrap();
    assert_eq!(config.api_key, ApiKey::new("primary"));
    assert_eq!(config.timeout, Some(Duration::from_secs(15)));
    assert_eq!(config.client().base_url(), "http://localhost:9000");

    clear_env();
}

#[test]
#[serial]
fn test_legacy_key_fallback() {
    clear_env();
    env::set_var(LEGACY_API_KEY_VAR, "legacy");

    let config = Config::from_env().unwrap();
    assert_eq!(config.api_key, ApiKey::new("legacy"));

    env::set_var(API_KEY_VAR, "primary");
    let config = Config::from_env().unwrap();
    assert_eq!(config.api_key, ApiKey::new("primary"));

    clear_env();
}

#[test]
#[serial]
fn test_bad_timeout_is_an_error() {
    clear_env();
    env::set_var(TIMEOUT_VAR, "soon");

    let err = Config::from_env().unwrap_err();
    assert!(err.to_string().contains(TIMEOUT_VAR));

    clear_env();
}
