//! Common types for the board: cell marks, words, keys and board errors.

use crate::config::WORD_LEN;
use core::fmt;

/// Classification of a single cell, assigned only from server feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Mark {
    /// No feedback received yet.
    #[default]
    Unset,
    /// Letter is in the word at this position.
    Correct,
    /// Letter is in the word at another position.
    Present,
    /// Letter is not in the word (after duplicate accounting).
    Absent,
}

impl Mark {
    /// Ranking used when several cells carry the same letter.
    pub fn rank(self) -> u8 {
        match self {
            Mark::Unset => 0,
            Mark::Absent => 1,
            Mark::Present => 2,
            Mark::Correct => 3,
        }
    }
}

/// A five letter, uppercase ASCII guess.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word([u8; WORD_LEN]);

impl Word {
    /// Parse a word, ignoring surrounding whitespace and case.
    pub fn parse(input: &str) -> Result<Self, BoardError> {
        let trimmed = input.trim();
        let mut letters = [0u8; WORD_LEN];
        let mut len = 0;
        for ch in trimmed.chars() {
            if len == WORD_LEN || !ch.is_ascii_alphabetic() {
                return Err(BoardError::InvalidWord);
            }
            letters[len] = ch.to_ascii_uppercase() as u8;
            len += 1;
        }
        if len != WORD_LEN {
            return Err(BoardError::InvalidWord);
        }
        Ok(Word(letters))
    }

    pub(crate) fn from_letters(letters: [u8; WORD_LEN]) -> Self {
        Word(letters)
    }

    /// Letter at `index` as an uppercase char.
    pub fn letter(&self, index: usize) -> char {
        self.0[index] as char
    }

    pub fn bytes(&self) -> &[u8; WORD_LEN] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII letters are ever stored.
        core::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({})", self.as_str())
    }
}

/// A discrete keyboard event, from a physical or on-screen keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Letter(char),
    Backspace,
    Enter,
    Other,
}

impl Key {
    /// Map a browser style key name (`"a"`, `"Backspace"`, `"Enter"`).
    pub fn from_name(name: &str) -> Self {
        match name {
            "Backspace" => Key::Backspace,
            "Enter" => Key::Enter,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Key::from(ch),
                    _ => Key::Other,
                }
            }
        }
    }
}

impl From<char> for Key {
    fn from(ch: char) -> Self {
        match ch {
            '\n' | '\r' => Key::Enter,
            '\u{8}' => Key::Backspace,
            c if c.is_ascii_alphabetic() => Key::Letter(c.to_ascii_uppercase()),
            _ => Key::Other,
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Input is not exactly five alphabetic characters.
    InvalidWord,
    /// Commit attempted before the open row was full.
    RowIncomplete,
    /// The board accepts no more edits.
    Frozen,
    /// A guess for the open row is awaiting its response.
    Pending,
    /// Feedback arrived while no guess was pending.
    NotPending,
    /// Feedback addressed a row other than the open one.
    RowMismatch,
    /// Feedback code was not exactly five symbols.
    MalformedFeedback,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidWord => write!(f, "Word must be exactly 5 letters"),
            BoardError::RowIncomplete => write!(f, "Row is not full"),
            BoardError::Frozen => write!(f, "Board is frozen"),
            BoardError::Pending => write!(f, "A guess is already being evaluated"),
            BoardError::NotPending => write!(f, "No guess is awaiting feedback"),
            BoardError::RowMismatch => write!(f, "Feedback does not match the open row"),
            BoardError::MalformedFeedback => write!(f, "Feedback code must be 5 symbols"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
