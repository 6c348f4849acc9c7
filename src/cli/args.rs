use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pajajap")]
#[command(about = "Interactive Paj Ajap translator backed by an LLM")]
#[command(version)]
pub struct Args {
    /// Provider name from the config file (defaults to the built-in "groq")
    #[arg(short = 'p', long, global = true)]
    pub provider: Option<String>,

    /// Model identifier
    #[arg(short = 'm', long, global = true)]
    pub model: Option<String>,

    /// API endpoint URL (overrides the provider's endpoint)
    #[arg(short = 'e', long, global = true)]
    pub endpoint: Option<String>,

    /// Echo the raw model reply to stderr after each translation
    #[arg(short = 'r', long)]
    pub show_raw: bool,

    /// Suppress status output and the spinner
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the instruction sent to the model with every request
    Prompt,
    /// List configured providers
    Providers {
        /// Show details for a specific provider
        provider: Option<String>,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_runs_loop() {
        let args = Args::try_parse_from(["pajajap"]).unwrap();
        assert!(args.command.is_none());
        assert!(!args.show_raw);
        assert!(args.model.is_none());
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "pajajap",
            "-m",
            "llama3.2",
            "--endpoint",
            "http://localhost:11434",
            "--show-raw",
        ])
        .unwrap();
        assert_eq!(args.model.as_deref(), Some("llama3.2"));
        assert_eq!(args.endpoint.as_deref(), Some("http://localhost:11434"));
        assert!(args.show_raw);
    }

    #[test]
    fn test_providers_subcommand() {
        let args = Args::try_parse_from(["pajajap", "providers", "groq"]).unwrap();
        assert!(matches!(
            args.command,
            Some(Command::Providers { provider: Some(ref p) }) if p == "groq"
        ));
    }

    #[test]
    fn test_unknown_argument_rejected() {
        assert!(Args::try_parse_from(["pajajap", "happy"]).is_err());
    }
}
