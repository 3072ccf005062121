//! Board state machine: six attempt rows, a linear cursor and the game lifecycle.

use crate::common::{BoardError, Key, Mark, Word};
use crate::config::{ROWS, WORD_LEN};
use crate::feedback::Feedback;

/// One letter slot on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub letter: Option<char>,
    pub mark: Mark,
}

/// Game lifecycle; leaves `Active` only on a server-declared outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Active,
    Won,
    Lost,
}

/// Terminal outcome carried by a guess response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Observable state of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Open row accepting keys.
    Editing { row: usize, col: usize },
    /// Open row submitted; waiting for the service.
    Pending { row: usize },
    /// Game over, or every row used.
    Frozen,
}

/// What a key press did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Board unchanged.
    Ignored,
    /// A letter was written or erased.
    Edited,
    /// Enter on a full row; the row is now pending.
    Commit(Word),
    /// Enter on a row that is not full.
    Incomplete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; WORD_LEN]; ROWS],
    row: usize,
    col: usize,
    lifecycle: Lifecycle,
    pending: bool,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board with the cursor at (0, 0).
    pub fn new() -> Self {
        Board {
            cells: [[Cell::default(); WORD_LEN]; ROWS],
            row: 0,
            col: 0,
            lifecycle: Lifecycle::Active,
            pending: false,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.lifecycle != Lifecycle::Active || self.row >= ROWS {
            Phase::Frozen
        } else if self.pending {
            Phase::Pending { row: self.row }
        } else {
            Phase::Editing {
                row: self.row,
                col: self.col,
            }
        }
    }

    /// Cursor as (current row, current column).
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_frozen(&self) -> bool {
        self.phase() == Phase::Frozen
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase(), Phase::Pending { .. })
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub fn rows(&self) -> &[[Cell; WORD_LEN]; ROWS] {
        &self.cells
    }

    /// Number of rows carrying feedback.
    pub fn committed_rows(&self) -> usize {
        self.cells
            .iter()
            .take_while(|row| row.iter().all(|c| c.mark != Mark::Unset))
            .count()
    }

    /// Process a single key. Frozen and pending boards ignore every key.
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        let Phase::Editing { row, col } = self.phase() else {
            return KeyOutcome::Ignored;
        };
        match key {
            Key::Letter(ch) if ch.is_ascii_alphabetic() && col < WORD_LEN => {
                self.cells[row][col].letter = Some(ch.to_ascii_uppercase());
                self.col += 1;
                KeyOutcome::Edited
            }
            Key::Backspace if col > 0 => {
                self.col -= 1;
                self.cells[row][self.col].letter = None;
                KeyOutcome::Edited
            }
            Key::Enter => match self.commit() {
                Ok(word) => KeyOutcome::Commit(word),
                Err(_) => KeyOutcome::Incomplete,
            },
            _ => KeyOutcome::Ignored,
        }
    }

    /// Overwrite the open row with `word` and commit it.
    pub fn fill_row(&mut self, word: Word) -> Result<Word, BoardError> {
        let row = self.editing_row()?;
        for (i, cell) in self.cells[row].iter_mut().enumerate() {
            cell.letter = Some(word.letter(i));
        }
        self.col = WORD_LEN;
        self.commit()
    }

    /// Mark the open row pending and return its letters.
    pub fn commit(&mut self) -> Result<Word, BoardError> {
        let row = self.editing_row()?;
        if self.col < WORD_LEN {
            return Err(BoardError::RowIncomplete);
        }
        let mut letters = [0u8; WORD_LEN];
        for (i, cell) in self.cells[row].iter().enumerate() {
            match cell.letter {
                Some(ch) => letters[i] = ch as u8,
                None => return Err(BoardError::RowIncomplete),
            }
        }
        self.pending = true;
        Ok(Word::from_letters(letters))
    }

    /// Classify the pending row from server feedback and open the next one.
    pub fn apply_feedback(&mut self, row: usize, feedback: Feedback) -> Result<(), BoardError> {
        match self.phase() {
            Phase::Pending { row: open } if open == row => {}
            Phase::Pending { .. } => return Err(BoardError::RowMismatch),
            Phase::Editing { .. } => return Err(BoardError::NotPending),
            Phase::Frozen => return Err(BoardError::Frozen),
        }
        for (cell, mark) in self.cells[row].iter_mut().zip(feedback.marks()) {
            cell.mark = *mark;
        }
        self.row += 1;
        self.col = 0;
        self.pending = false;
        Ok(())
    }

    /// Drop the pending flag after a rejected or failed submission. Letters stay.
    pub fn release(&mut self) {
        self.pending = false;
    }

    /// Apply a server-declared outcome.
    pub fn finish(&mut self, outcome: Outcome) {
        self.pending = false;
        self.lifecycle = match outcome {
            Outcome::Won => Lifecycle::Won,
            Outcome::Lost => Lifecycle::Lost,
        };
    }

    /// Clear all rows and marks, cursor to (0, 0), lifecycle active.
    pub fn reset(&mut self) {
        *self = Board::new();
    }

    /// Best known mark for each letter A..=Z, for colouring a keyboard.
    pub fn letter_marks(&self) -> [Mark; 26] {
        let mut marks = [Mark::Unset; 26];
        for cell in self.cells.iter().flatten() {
            if let Some(ch) = cell.letter {
                let slot = &mut marks[(ch as u8 - b'A') as usize];
                if cell.mark.rank() > slot.rank() {
                    *slot = cell.mark;
                }
            }
        }
        marks
    }

    fn editing_row(&self) -> Result<usize, BoardError> {
        match self.phase() {
            Phase::Editing { row, .. } => Ok(row),
            Phase::Pending { .. } => Err(BoardError::Pending),
            Phase::Frozen => Err(BoardError::Frozen),
        }
    }
}
