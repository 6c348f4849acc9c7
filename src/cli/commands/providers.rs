//! Provider listing command handler.

use anyhow::Result;

use crate::config::{ConfigManager, DEFAULT_PROVIDER};
use crate::ui::Style;

/// Prints known providers to stdout.
///
/// If `specific_provider` is provided, shows detailed information for that provider.
/// Otherwise, lists every provider with its endpoint and models. The built-in
/// provider is always listed.
pub fn print_providers(specific_provider: Option<&str>) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load_or_default()?;
    let providers = config.all_providers();

    let default_provider = config
        .pajajap
        .provider
        .as_deref()
        .unwrap_or(DEFAULT_PROVIDER);

    let marker = |name: &str| {
        if name == default_provider {
            format!(" {}", Style::default_marker())
        } else {
            String::new()
        }
    };

    if let Some(provider_name) = specific_provider {
        let Some(provider) = providers.get(provider_name) else {
            anyhow::bail!("Provider '{provider_name}' not found");
        };

        println!(
            "{} {}{}",
            Style::header("Provider:"),
            Style::value(provider_name),
            marker(provider_name)
        );
        println!("  {} = {}", Style::label("endpoint"), provider.endpoint);
        if provider.api_key_env.is_some() || provider.api_key.is_some() {
            let has_key = provider.get_api_key().is_some();
            println!(
                "  {}  = {}",
                Style::label("api_key"),
                if has_key { "(set)" } else { "(not set)" }
            );
        }
        if let Some(env_var) = &provider.api_key_env {
            println!("  {}  = {env_var}", Style::label("key env"));
        }
        if provider.models.is_empty() {
            println!("  {}   = (none configured)", Style::label("models"));
        } else {
            println!("  {}:", Style::label("models"));
            for model in &provider.models {
                println!("    - {model}");
            }
        }
    } else {
        println!("{}\n", Style::header("Configured providers:"));
        for (name, provider) in &providers {
            println!("  {}{}", Style::value(name), marker(name.as_str()));
            println!("    endpoint: {}", Style::secondary(&provider.endpoint));
            if !provider.models.is_empty() {
                println!("    models: {}", provider.models.join(", "));
            }
        }
        println!();
        println!(
            "{}",
            Style::hint(format!(
                "Add providers to {}",
                manager.config_path().display()
            ))
        );
    }

    Ok(())
}
