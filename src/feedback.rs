//! Per-letter feedback codes exchanged with the word-evaluation service.

use crate::common::{BoardError, Mark, Word};
use crate::config::WORD_LEN;
use alloc::string::String;

/// Classification of all five letters of one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback(pub [Mark; WORD_LEN]);

impl Feedback {
    /// Decode a wire code. `G` is correct, `Y` is present, any other symbol is absent.
    pub fn parse(code: &str) -> Result<Self, BoardError> {
        let mut marks = [Mark::Absent; WORD_LEN];
        let mut len = 0;
        for ch in code.chars() {
            if len == WORD_LEN {
                return Err(BoardError::MalformedFeedback);
            }
            marks[len] = match ch {
                'G' => Mark::Correct,
                'Y' => Mark::Present,
                _ => Mark::Absent,
            };
            len += 1;
        }
        if len != WORD_LEN {
            return Err(BoardError::MalformedFeedback);
        }
        Ok(Feedback(marks))
    }

    /// Encode using `G`, `Y` and `_`.
    pub fn code(&self) -> String {
        self.0
            .iter()
            .map(|m| match m {
                Mark::Correct => 'G',
                Mark::Present => 'Y',
                _ => '_',
            })
            .collect()
    }

    pub fn marks(&self) -> &[Mark; WORD_LEN] {
        &self.0
    }

    /// Every letter in place. Display only; the lifecycle follows the server's flags.
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|m| *m == Mark::Correct)
    }

    /// Evaluate `guess` against `secret`.
    ///
    /// Exact matches are taken first. Remaining guess letters are then scanned
    /// left to right, each consuming at most one unmatched occurrence in the
    /// secret, so a letter guessed twice but present once is marked only once.
    pub fn score(secret: &Word, guess: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LEN];
        let mut unmatched: [Option<u8>; WORD_LEN] = [None; WORD_LEN];
        let secret = secret.bytes();
        let guess = guess.bytes();

        for i in 0..WORD_LEN {
            if guess[i] == secret[i] {
                marks[i] = Mark::Correct;
            } else {
                unmatched[i] = Some(secret[i]);
            }
        }
        for i in 0..WORD_LEN {
            if marks[i] == Mark::Correct {
                continue;
            }
            if let Some(slot) = unmatched.iter_mut().find(|s| **s == Some(guess[i])) {
                *slot = None;
                marks[i] = Mark::Present;
            }
        }
        Feedback(marks)
    }

    /// True when `candidate` as the secret would have produced this feedback for `guess`.
    pub fn admits(&self, candidate: &Word, guess: &Word) -> bool {
        Feedback::score(candidate, guess) == *self
    }
}
