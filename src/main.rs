use anyhow::Result;
use clap::Parser;

use pajajap::cli::commands::{prompt, providers, translate};
use pajajap::cli::{Args, Command};
use pajajap::output::{self, OutputConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // A `.env` in the working directory may carry the API key.
    let _ = dotenvy::dotenv();

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || std::env::var("NO_COLOR").is_ok(),
    });

    match args.command {
        Some(Command::Prompt) => {
            prompt::print_prompt();
        }
        Some(Command::Providers { provider }) => {
            providers::print_providers(provider.as_deref())?;
        }
        None => {
            let options = translate::TranslateOptions {
                provider: args.provider,
                model: args.model,
                endpoint: args.endpoint,
                show_raw: args.show_raw,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
