//! Interactive translate loop.
//!
//! Reads one line at a time, translates it, prints one line back, and stops
//! on `exit`/`quit` or end of input.

/// Line classification (exit keywords vs. text to translate).
pub mod command;
mod session;

pub use session::{LoopOptions, PROMPT, run};
