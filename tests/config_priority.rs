#![allow(clippy::unwrap_used)]
//! Config priority contract tests.
//!
//! Priority order (highest to lowest):
//! 1. CLI arguments
//! 2. Config file defaults
//! 3. Built-in defaults

use pajajap::config::{
    AppConfig, ConfigFile, DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_PROVIDER, ProviderConfig,
    ResolveOptions, resolve_config,
};
use std::collections::HashMap;

fn make_config_with_defaults() -> ConfigFile {
    let mut providers = HashMap::new();
    providers.insert(
        "test_provider".to_string(),
        ProviderConfig {
            endpoint: "http://test.local".to_string(),
            api_key: Some("test_key".to_string()),
            api_key_env: None,
            models: vec!["config_model".to_string()],
        },
    );

    ConfigFile {
        pajajap: AppConfig {
            provider: Some("test_provider".to_string()),
            model: Some("config_model".to_string()),
        },
        providers,
    }
}

#[test]
fn test_config_values_used_when_cli_not_specified() {
    let config = make_config_with_defaults();

    let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();

    assert_eq!(resolved.provider_name, "test_provider");
    assert_eq!(resolved.endpoint, "http://test.local");
    assert_eq!(resolved.model, "config_model");
    assert_eq!(resolved.api_key.as_deref(), Some("test_key"));
}

#[test]
fn test_cli_model_overrides_config_model() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        model: Some("cli_model".to_string()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.model, "cli_model");
}

#[test]
fn test_cli_endpoint_overrides_provider_endpoint() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        endpoint: Some("http://cli.local".to_string()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.provider_name, "test_provider");
    assert_eq!(resolved.endpoint, "http://cli.local");
    // The credential still comes from the selected provider
    assert_eq!(resolved.api_key.as_deref(), Some("test_key"));
}

#[test]
fn test_cli_provider_can_select_builtin() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        provider: Some(DEFAULT_PROVIDER.to_string()),
        model: Some(DEFAULT_MODEL.to_string()),
        endpoint: None,
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.provider_name, DEFAULT_PROVIDER);
    assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(resolved.model, DEFAULT_MODEL);
}

#[test]
fn test_builtin_defaults_without_config() {
    let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

    assert_eq!(resolved.provider_name, DEFAULT_PROVIDER);
    assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(resolved.model, DEFAULT_MODEL);
}

#[test]
fn test_unknown_provider_returns_error() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        provider: Some("nonexistent".to_string()),
        ..ResolveOptions::default()
    };

    assert!(resolve_config(&options, &config).is_err());
}
