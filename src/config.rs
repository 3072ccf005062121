/// Number of attempt rows on the board.
pub const ROWS: usize = 6;
/// Letters per word, and cells per row.
pub const WORD_LEN: usize = 5;
/// Suggestions requested per page when nothing else is configured.
pub const DEFAULT_PAGE_LIMIT: usize = 10;

/// Status tag the server returns when a game was created.
pub const NEW_GAME_STATUS: &str = "new_game";

/// Environment variable read by `init_logging`.
pub const LOG_ENV: &str = "WORDLE_LOG";
