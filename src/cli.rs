#![cfg(feature = "std")]

//! Line-oriented input for the terminal front end.

use crate::common::Key;

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Keys to press in order. Enter ends the line unless it ended with `<`.
    Keys(Vec<Key>),
    /// `:guess WORD` submits a whole word.
    Guess(String),
    /// `:pick N` accepts the N-th displayed suggestion (1-based).
    Pick(usize),
    More,
    NewGame,
    Help,
    Quit,
}

pub const HELP: &str = "\
Type letters and press Enter to guess. `<` erases a letter; a line ending
in `<` is not submitted.
  :pick N     play suggestion N
  :more       load more suggestions
  :guess W    submit word W
  :new        start a new game
  :quit       leave";

/// Parse an input line. Unknown `:` commands are an error message.
pub fn parse_line(line: &str) -> Result<Command, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(rest) = line.trim().strip_prefix(':') else {
        let mut keys: Vec<Key> = line
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| if c == '<' { Key::Backspace } else { Key::from(c) })
            .collect();
        if keys.last() != Some(&Key::Backspace) {
            keys.push(Key::Enter);
        }
        return Ok(Command::Keys(keys));
    };

    let mut parts = rest.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("pick"), Some(n)) => match n.parse::<usize>() {
            Ok(n) if n > 0 => Ok(Command::Pick(n)),
            _ => Err(format!("Not a suggestion number: {}", n)),
        },
        (Some("guess"), Some(word)) => Ok(Command::Guess(word.to_string())),
        (Some("more"), None) => Ok(Command::More),
        (Some("new"), None) => Ok(Command::NewGame),
        (Some("help"), None) => Ok(Command::Help),
        (Some("quit"), None) | (Some("q"), None) => Ok(Command::Quit),
        _ => Err(format!("Unknown command: {}", line.trim())),
    }
}

/// Map a 1-based `:pick` number onto the `shown` suggestions.
pub fn pick_index(n: usize, shown: usize) -> Result<usize, String> {
    if n == 0 || n > shown {
        return Err(format!("Not a suggestion number: {}", n));
    }
    Ok(n - 1)
}
