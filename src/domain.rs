//! Request and response bodies of the word-evaluation service.

use alloc::string::String;
use alloc::vec::Vec;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct NewGameResponse {
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GuessRequest {
    pub guess: String,
    /// Client game token the request was issued under.
    #[cfg_attr(feature = "std", serde(default))]
    pub game: u64,
}

/// One recorded guess of the current game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Attempt {
    pub guess: String,
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GuessResponse {
    pub feedback: String,
    #[cfg_attr(feature = "std", serde(default))]
    pub won: bool,
    #[cfg_attr(feature = "std", serde(default))]
    pub lost: bool,
    #[cfg_attr(
        feature = "std",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub secret: Option<String>,
    #[cfg_attr(feature = "std", serde(default))]
    pub attempts: Vec<Attempt>,
}

/// Body of a rejected request.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorBody {
    pub error: String,
}

/// Decided result of a guess submission that reached the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessReply {
    Accepted(GuessResponse),
    /// Malformed or unknown word; `error` is shown to the player verbatim.
    Rejected { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(default))]
pub struct SuggestionPage {
    pub suggestions: Vec<String>,
    pub count: usize,
}
