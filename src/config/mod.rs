//! Configuration file management and provider settings.

mod manager;

pub use manager::{
    AppConfig, ConfigFile, ConfigManager, DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_MODEL,
    DEFAULT_PROVIDER, ProviderConfig, ResolveOptions, ResolvedConfig, resolve_config,
};
