//! Game session: reconciles service responses into board transitions.
//!
//! [`GameSession`] never performs I/O. Every operation returns the request a
//! driver should issue next, and every response is fed back through one of
//! the `on_*` handlers. Guess and suggestion requests carry the game token
//! they were issued under, so a response that lands after a new game has
//! started is recognised and discarded.

use crate::board::{Board, KeyOutcome, Lifecycle, Outcome, Phase};
use crate::common::{Key, Word};
use crate::config::NEW_GAME_STATUS;
use crate::domain::{GuessReply, GuessResponse, NewGameResponse, SuggestionPage};
use crate::feedback::Feedback;
use crate::suggestions::{PageRequest, SuggestionList};
use alloc::format;
use alloc::string::{String, ToString};

pub const MSG_INVALID_LENGTH: &str = "Please enter a 5-letter word.";
pub const MSG_WON: &str = "Congratulations! You won!";
pub const MSG_LOST: &str = "Game over!";
pub const MSG_FAILURE: &str = "Something went wrong. Please try again.";

/// A remote call the driver must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    NewGame,
    Guess { game: u64, guess: Word },
    Suggestions { game: u64, page: PageRequest },
}

#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    suggestions: SuggestionList,
    message: Option<String>,
    play_again: bool,
    game: u64,
    /// A new-game request is in flight; guesses would land on the next game.
    starting: bool,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SuggestionList::default())
    }
}

impl GameSession {
    pub fn new(suggestions: SuggestionList) -> Self {
        Self {
            board: Board::new(),
            suggestions,
            message: None,
            play_again: false,
            game: 0,
            starting: false,
        }
    }

    /// Session fetching `limit` suggestions per page.
    pub fn with_page_limit(limit: usize) -> Self {
        Self::new(SuggestionList::new(limit))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn suggestions(&self) -> &SuggestionList {
        &self.suggestions
    }

    /// Message currently shown to the player.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether a "new game" affordance is on offer.
    pub fn play_again_offered(&self) -> bool {
        self.play_again
    }

    /// Token of the game currently displayed.
    pub fn game(&self) -> u64 {
        self.game
    }

    /// Whether a new-game request is outstanding.
    pub fn is_starting(&self) -> bool {
        self.starting
    }

    /// Request a new game. Input is ignored until the response is handled.
    pub fn start_new_game(&mut self) -> Request {
        self.starting = true;
        Request::NewGame
    }

    /// Feed one key to the board. Enter on a full row yields a guess request.
    pub fn handle_key(&mut self, key: Key) -> Option<Request> {
        if self.starting {
            log::debug!("ignoring {:?} while a new game is starting", key);
            return None;
        }
        match self.board.handle_key(key) {
            KeyOutcome::Commit(word) => Some(self.issue_guess(word)),
            KeyOutcome::Incomplete => {
                self.message = Some(MSG_INVALID_LENGTH.to_string());
                None
            }
            KeyOutcome::Edited | KeyOutcome::Ignored => None,
        }
    }

    /// Typed-word entry: validates the word locally, then fills and commits the row.
    pub fn submit_guess(&mut self, word: &str) -> Option<Request> {
        self.fill_row(word)
    }

    /// Overwrite the open row with `word` and commit it, exactly as typing it would.
    pub fn fill_row(&mut self, word: &str) -> Option<Request> {
        if self.starting {
            log::debug!("ignoring row fill while a new game is starting");
            return None;
        }
        let word = match Word::parse(word) {
            Ok(word) => word,
            Err(_) => {
                self.message = Some(MSG_INVALID_LENGTH.to_string());
                return None;
            }
        };
        match self.board.fill_row(word) {
            Ok(word) => Some(self.issue_guess(word)),
            Err(e) => {
                log::debug!("ignoring row fill for {}: {}", word, e);
                None
            }
        }
    }

    /// Accept the suggestion at `index` of the displayed list.
    pub fn select_suggestion(&mut self, index: usize) -> Option<Request> {
        let word = self.suggestions.words().get(index)?.clone();
        self.fill_row(&word)
    }

    /// Replace the suggestion list with the first page.
    pub fn refresh_suggestions(&mut self) -> Request {
        Request::Suggestions {
            game: self.game,
            page: self.suggestions.begin_refresh(),
        }
    }

    /// Next suggestion page, if there is one and no fetch is outstanding.
    pub fn load_more_suggestions(&mut self) -> Option<Request> {
        let page = self.suggestions.begin_load_more()?;
        Some(Request::Suggestions {
            game: self.game,
            page,
        })
    }

    pub fn on_new_game(&mut self, result: anyhow::Result<NewGameResponse>) -> Option<Request> {
        self.starting = false;
        match result {
            Ok(resp) if resp.status == NEW_GAME_STATUS => {
                self.game += 1;
                self.board.reset();
                self.suggestions.clear();
                self.message = None;
                self.play_again = false;
                log::info!("started game {}", self.game);
                Some(self.refresh_suggestions())
            }
            Ok(resp) => {
                log::warn!("unexpected new game status {:?}", resp.status);
                self.message = Some(MSG_FAILURE.to_string());
                None
            }
            Err(e) => {
                log::warn!("new game request failed: {:#}", e);
                self.message = Some(MSG_FAILURE.to_string());
                None
            }
        }
    }

    pub fn on_guess(&mut self, game: u64, result: anyhow::Result<GuessReply>) -> Option<Request> {
        if game != self.game {
            log::debug!("discarding guess response for game {} (now {})", game, self.game);
            return None;
        }
        if !self.board.is_pending() {
            log::debug!("discarding guess response with no guess pending");
            return None;
        }
        match result {
            Ok(GuessReply::Accepted(resp)) => self.accept_guess(resp),
            Ok(GuessReply::Rejected { error }) => {
                log::info!("guess rejected: {}", error);
                self.board.release();
                self.message = Some(error);
                None
            }
            Err(e) => {
                log::warn!("guess request failed: {:#}", e);
                self.board.release();
                self.message = Some(MSG_FAILURE.to_string());
                None
            }
        }
    }

    pub fn on_suggestions(
        &mut self,
        game: u64,
        page: PageRequest,
        result: anyhow::Result<SuggestionPage>,
    ) {
        if game != self.game {
            log::debug!("discarding suggestions for game {} (now {})", game, self.game);
            return;
        }
        match result {
            Ok(resp) => {
                if !self.suggestions.accept(page, resp) {
                    log::debug!("discarding superseded suggestion page at offset {}", page.offset);
                }
            }
            Err(e) => {
                log::warn!("suggestion request failed: {:#}", e);
                self.suggestions.fail(page);
                // a finished game keeps its outcome on screen
                if self.board.lifecycle() == Lifecycle::Active {
                    self.message = Some(MSG_FAILURE.to_string());
                }
            }
        }
    }

    fn issue_guess(&mut self, guess: Word) -> Request {
        log::debug!("submitting {} for game {}", guess, self.game);
        Request::Guess {
            game: self.game,
            guess,
        }
    }

    fn accept_guess(&mut self, resp: GuessResponse) -> Option<Request> {
        let Phase::Pending { row } = self.board.phase() else {
            return None;
        };
        let applied = Feedback::parse(&resp.feedback)
            .and_then(|feedback| self.board.apply_feedback(row, feedback));
        if let Err(e) = applied {
            log::warn!("unusable feedback {:?}: {}", resp.feedback, e);
            self.board.release();
            self.message = Some(MSG_FAILURE.to_string());
            return None;
        }

        if resp.won {
            self.board.finish(Outcome::Won);
            self.message = Some(MSG_WON.to_string());
            self.play_again = true;
            log::info!("game {} won in {} guesses", self.game, row + 1);
        } else if resp.lost {
            self.board.finish(Outcome::Lost);
            self.message = Some(match resp.secret {
                Some(secret) => format!("{} The word was {}", MSG_LOST, secret),
                None => MSG_LOST.to_string(),
            });
            self.play_again = true;
            log::info!("game {} lost", self.game);
        } else {
            self.message = None;
        }
        Some(self.refresh_suggestions())
    }
}
