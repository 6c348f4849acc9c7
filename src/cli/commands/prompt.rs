use crate::translation::SYSTEM_PROMPT;

/// Prints the fixed system instruction to stdout.
pub fn print_prompt() {
    print!("{SYSTEM_PROMPT}");
}
