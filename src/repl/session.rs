use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use super::command::{Input, parse_input, strip_line_ending};
use crate::translation::{Translation, Translator};
use crate::ui::{Spinner, Style};

/// Printed before every line read.
pub const PROMPT: &str = "Enter text to translate (or 'exit'): ";

/// Optional behavior of the loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoopOptions {
    /// Echo each raw service payload to stderr.
    pub show_raw: bool,
}

/// Runs the prompt/translate/print loop until an exit keyword or end of input.
///
/// Translation failures are printed and the loop continues; only I/O errors on
/// `input` or `output` end it early.
pub async fn run<R, W>(
    translator: &Translator,
    mut input: R,
    mut output: W,
    options: LoopOptions,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        let bytes_read = input
            .read_line(&mut line)
            .context("Failed to read from stdin")?;

        if bytes_read == 0 {
            // End the pending prompt line.
            writeln!(output)?;
            break;
        }

        let text = match parse_input(strip_line_ending(&line)) {
            Input::Exit => break,
            Input::Text(text) => text,
        };

        let outcome = {
            let _spinner = Spinner::start("Translating...");
            translator.translate(text).await
        };

        if options.show_raw {
            print_raw(&outcome);
        }

        writeln!(output, "{}", outcome.display_line())?;
        output.flush()?;
    }

    Ok(())
}

fn print_raw(outcome: &Translation) {
    match &outcome.raw {
        Some(raw) => eprintln!("{} {raw}", Style::label("raw:")),
        None => eprintln!("{} {}", Style::label("raw:"), Style::hint("(no payload)")),
    }
}
