use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::PathBuf;

use crate::paths;
use crate::ui::Style;

/// Provider used when neither the CLI nor the config file names one.
pub const DEFAULT_PROVIDER: &str = "groq";

/// Endpoint of the built-in provider (OpenAI-compatible root).
pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai";

/// Environment variable holding the built-in provider's API key.
pub const DEFAULT_API_KEY_ENV: &str = "GROQ_API_KEY";

/// Model used when neither the CLI, the config file, nor the provider names one.
pub const DEFAULT_MODEL: &str = "deepseek-r1-distill-llama-70b";

/// Default settings in the `[pajajap]` section of config.toml.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Default provider name.
    pub provider: Option<String>,
    /// Default model identifier.
    pub model: Option<String>,
}

/// Configuration for an inference provider.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// The OpenAI-compatible API endpoint URL.
    pub endpoint: String,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// Models known to work with this provider.
    #[serde(default)]
    pub models: Vec<String>,
}

impl ProviderConfig {
    /// The provider compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            api_key_env: Some(DEFAULT_API_KEY_ENV.to_string()),
            models: vec![
                DEFAULT_MODEL.to_string(),
                "meta-llama/llama-4-scout-17b-16e-instruct".to_string(),
            ],
        }
    }

    /// Gets the API key, preferring environment variable over config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/pajajap/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Default settings.
    #[serde(default)]
    pub pajajap: AppConfig,
    /// Provider configurations keyed by name.
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
}

impl ConfigFile {
    /// All providers, with the built-in one included unless the file redefines it.
    pub fn all_providers(&self) -> BTreeMap<String, ProviderConfig> {
        let mut providers = BTreeMap::new();
        providers.insert(DEFAULT_PROVIDER.to_string(), ProviderConfig::builtin());
        providers.extend(
            self.providers
                .iter()
                .map(|(name, provider)| (name.clone(), provider.clone())),
        );
        providers
    }
}

/// Resolved configuration after merging CLI arguments and config file.
///
/// Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The selected provider name.
    pub provider_name: String,
    /// The API endpoint URL.
    pub endpoint: String,
    /// The model identifier.
    pub model: String,
    /// The API key, if one could be found.
    pub api_key: Option<String>,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Provider name override.
    pub provider: Option<String>,
    /// Model identifier override.
    pub model: Option<String>,
    /// Endpoint override for the selected provider.
    pub endpoint: Option<String>,
}

/// Resolves configuration by merging CLI options, config file settings and
/// built-in defaults, in that order of priority.
///
/// A missing API key is not an error here; the service rejects the first
/// request instead.
///
/// # Errors
///
/// Returns an error if the selected provider is not configured.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let provider_name = options
        .provider
        .as_ref()
        .or(config_file.pajajap.provider.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_PROVIDER.to_string());

    let providers = config_file.all_providers();
    let provider_config = providers.get(&provider_name).ok_or_else(|| {
        let config_path = paths::config_dir().map_or_else(
            |_| "~/.config/pajajap/config.toml".to_string(),
            |dir| dir.join("config.toml").display().to_string(),
        );
        anyhow::anyhow!(
            "Provider '{provider_name}' not found\n\n\
             Available providers:\n  \
             - {}\n\n\
             Add providers to {config_path}",
            providers
                .keys()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join("\n  - ")
        )
    })?;

    let model = options
        .model
        .as_ref()
        .or(config_file.pajajap.model.as_ref())
        .or(provider_config.models.first())
        .cloned()
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    if !provider_config.models.is_empty() && !provider_config.models.contains(&model) {
        crate::warn!(
            "{} Model '{}' is not in the configured models list for '{}'\n\
             Configured models: {}\n\
             Proceeding anyway...\n",
            Style::warning("Warning:"),
            model,
            provider_name,
            provider_config.models.join(", ")
        );
    }

    let endpoint = options
        .endpoint
        .clone()
        .unwrap_or_else(|| provider_config.endpoint.clone());

    Ok(ResolvedConfig {
        api_key: provider_config.get_api_key(),
        provider_name,
        endpoint,
        model,
    })
}

/// Manages loading configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is read from `$XDG_CONFIG_HOME/pajajap/config.toml`
    /// or `~/.config/pajajap/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(config_file)
    }

    /// Loads the config file, falling back to defaults only when it does not exist.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}
