/// Keywords that end the session, compared case-insensitively after trimming.
pub const EXIT_KEYWORDS: &[&str] = &["exit", "quit"];

/// Input types
#[derive(Debug, PartialEq, Eq)]
pub enum Input<'a> {
    /// End the session.
    Exit,
    /// Forward to the translator unchanged.
    Text(&'a str),
}

/// Classifies one line of input with its line terminator already removed.
///
/// Anything that is not an exit keyword is text, including empty and
/// whitespace-only lines.
pub fn parse_input(line: &str) -> Input<'_> {
    let keyword = line.trim();

    if EXIT_KEYWORDS
        .iter()
        .any(|exit| keyword.eq_ignore_ascii_case(exit))
    {
        Input::Exit
    } else {
        Input::Text(line)
    }
}

/// Removes a trailing `\n` or `\r\n`, nothing else.
pub fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map_or(line, |l| l.strip_suffix('\r').unwrap_or(l))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_exit_keywords_any_case() {
        for line in ["exit", "Exit", "EXIT", "eXiT", "quit", "Quit", "QUIT", "qUiT"] {
            assert_eq!(parse_input(line), Input::Exit, "{line}");
        }
    }

    #[test]
    fn test_parse_input_exit_keywords_trimmed() {
        assert_eq!(parse_input("  exit  "), Input::Exit);
        assert_eq!(parse_input("\tquit"), Input::Exit);
    }

    #[test]
    fn test_parse_input_other_text() {
        for line in ["exit now", "quitter", "exi", "/quit", "happy", "kson"] {
            assert_eq!(parse_input(line), Input::Text(line), "{line}");
        }
    }

    #[test]
    fn test_parse_input_empty_lines_are_text() {
        assert_eq!(parse_input(""), Input::Text(""));
        assert_eq!(parse_input("   "), Input::Text("   "));
    }

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("happy\n"), "happy");
        assert_eq!(strip_line_ending("happy\r\n"), "happy");
        assert_eq!(strip_line_ending("happy"), "happy");
        assert_eq!(strip_line_ending("  happy  \n"), "  happy  ");
        assert_eq!(strip_line_ending("\n"), "");
    }

    #[test]
    fn test_strip_line_ending_keeps_lone_carriage_return() {
        assert_eq!(strip_line_ending("happy\r"), "happy\r");
    }
}
