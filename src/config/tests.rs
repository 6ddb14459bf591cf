use super::*;

use serial_test::serial;
use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_lookalike_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("LOOKALIKE_PORT");
        env::remove_var("LOOKALIKE_BIND_ADDR");
        env::remove_var("LOOKALIKE_ARTIFACT_PATH");
        env::remove_var("LOOKALIKE_CORPUS_PATH");
        env::remove_var("LOOKALIKE_TOP_K");
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_lookalike_env();
    let config = Config::default();

    assert_eq!(config.port, 8080);
    assert_eq!(
        config.bind_addr,
        IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1))
    );
    assert_eq!(config.artifact_path, PathBuf::from("./.data/artifacts.json"));
    assert!(config.corpus_path.is_none());
    assert_eq!(config.top_k, 3);
}

#[test]
#[serial]
fn test_from_env_defaults_when_unset() {
    clear_lookalike_env();
    let config = Config::from_env().expect("from_env");

    assert_eq!(config.port, 8080);
    assert_eq!(config.top_k, 3);
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_lookalike_env();
    let config = with_env_vars(
        &[
            ("LOOKALIKE_PORT", "9090"),
            ("LOOKALIKE_BIND_ADDR", "0.0.0.0"),
            ("LOOKALIKE_ARTIFACT_PATH", "/tmp/bundle.json"),
            ("LOOKALIKE_TOP_K", "5"),
        ],
        || Config::from_env().expect("from_env"),
    );

    assert_eq!(config.port, 9090);
    assert_eq!(config.bind_addr.to_string(), "0.0.0.0");
    assert_eq!(config.artifact_path, PathBuf::from("/tmp/bundle.json"));
    assert_eq!(config.top_k, 5);
}

#[test]
#[serial]
fn test_from_env_rejects_invalid_port() {
    clear_lookalike_env();
    let result = with_env_vars(&[("LOOKALIKE_PORT", "0")], Config::from_env);
    assert!(matches!(result, Err(ConfigError::InvalidPort { .. })));

    let result = with_env_vars(&[("LOOKALIKE_PORT", "not-a-port")], Config::from_env);
    assert!(matches!(result, Err(ConfigError::PortParseError { .. })));
}

#[test]
#[serial]
fn test_from_env_rejects_invalid_top_k() {
    clear_lookalike_env();
    let result = with_env_vars(&[("LOOKALIKE_TOP_K", "0")], Config::from_env);
    assert!(matches!(result, Err(ConfigError::InvalidTopK { .. })));
}

#[test]
#[serial]
fn test_from_env_ignores_blank_corpus_path() {
    clear_lookalike_env();
    let config = with_env_vars(&[("LOOKALIKE_CORPUS_PATH", "  ")], || {
        Config::from_env().expect("from_env")
    });
    assert!(config.corpus_path.is_none());
}

#[test]
fn test_validate_rejects_missing_corpus_file() {
    let config = Config {
        corpus_path: Some(PathBuf::from("/definitely/not/here.txt")),
        ..Config::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::PathNotFound { .. })
    ));
}

#[test]
fn test_socket_addr_format() {
    let config = Config::default();
    assert_eq!(config.socket_addr(), "127.0.0.1:8080");
}
