#![cfg(feature = "std")]

//! Text projection of a session. Pure: state in, string out.

use std::fmt::Write;

use crate::board::{Board, Phase};
use crate::common::Mark;
use crate::session::GameSession;
use crate::suggestions::SuggestionList;

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Render a letter with its mark: `[A]` correct, `(A)` present, ` a ` absent.
pub fn render_cell(letter: Option<char>, mark: Mark) -> String {
    let ch = letter.unwrap_or('_');
    match mark {
        Mark::Correct => format!("[{}]", ch),
        Mark::Present => format!("({})", ch),
        Mark::Absent => format!(" {} ", ch.to_ascii_lowercase()),
        Mark::Unset => format!(" {} ", ch),
    }
}

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    let open_row = match board.phase() {
        Phase::Editing { row, .. } | Phase::Pending { row } => Some(row),
        Phase::Frozen => None,
    };
    for (r, row) in board.rows().iter().enumerate() {
        let marker = match (open_row, board.is_pending()) {
            (Some(open), false) if open == r => '>',
            (Some(open), true) if open == r => '~',
            _ => ' ',
        };
        out.push(marker);
        for cell in row {
            out.push_str(&render_cell(cell.letter, cell.mark));
        }
        out.push('\n');
    }
    out
}

/// Keyboard rows with each letter shown under its best known mark.
pub fn render_keyboard(board: &Board) -> String {
    let marks = board.letter_marks();
    let mut out = String::new();
    for (i, row) in KEYBOARD_ROWS.iter().enumerate() {
        out.push_str(&" ".repeat(i));
        for ch in row.chars() {
            let mark = marks[(ch as u8 - b'A') as usize];
            out.push_str(&render_cell(Some(ch), mark));
        }
        out.push('\n');
    }
    out
}

pub fn render_suggestions(list: &SuggestionList) -> String {
    let mut out = String::new();
    if list.words().is_empty() {
        if list.is_loading() {
            out.push_str("Suggestions: loading...\n");
        }
        return out;
    }
    let _ = writeln!(out, "Suggestions ({} remaining):", list.count());
    for (i, word) in list.words().iter().enumerate() {
        let _ = writeln!(out, "  {:>2}. {}", i + 1, word);
    }
    if list.can_load_more() {
        out.push_str("  ... type :more for more\n");
    } else if list.is_loading() {
        out.push_str("  ... loading\n");
    }
    out
}

/// Whole screen for one session state.
pub fn render(session: &GameSession) -> String {
    let mut out = render_board(session.board());
    out.push('\n');
    out.push_str(&render_keyboard(session.board()));
    out.push('\n');
    out.push_str(&render_suggestions(session.suggestions()));
    if let Some(message) = session.message() {
        let _ = writeln!(out, "\n{}", message);
    }
    if session.play_again_offered() {
        out.push_str("Type :new to play again.\n");
    }
    out
}
