//! Interactive translation command handler.

use anyhow::Result;
use std::io;

use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::repl::{self, LoopOptions};
use crate::translation::Translator;
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct TranslateOptions {
    pub provider: Option<String>,
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub show_raw: bool,
}

/// Resolves configuration once, then runs the interactive loop on stdin/stdout.
///
/// The translator (and its HTTP client) lives only for the duration of the loop.
pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let config = load_session_config(&options)?;

    crate::status!(
        "{} {} - {} via {}",
        Style::header("pajajap"),
        Style::version(format!("v{VERSION}")),
        Style::value(&config.model),
        Style::secondary(&config.provider_name)
    );

    let translator = Translator::new(&config);
    let loop_options = LoopOptions {
        show_raw: options.show_raw,
    };

    repl::run(&translator, io::stdin().lock(), io::stdout().lock(), loop_options).await
}

fn load_session_config(options: &TranslateOptions) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;

    let resolve_options = ResolveOptions {
        provider: options.provider.clone(),
        model: options.model.clone(),
        endpoint: options.endpoint.clone(),
    };

    resolve_config(&resolve_options, &file_config)
}
