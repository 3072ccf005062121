use crate::domain::{GuessReply, GuessRequest, NewGameResponse, SuggestionPage};

/// Remote word-evaluation service.
///
/// A word the service refuses is an `Ok(GuessReply::Rejected)`; `Err` is
/// reserved for transport and decoding failures.
#[async_trait::async_trait]
pub trait WordService: Send + Sync {
    /// Start a fresh game, discarding the previous one.
    async fn new_game(&self) -> anyhow::Result<NewGameResponse>;
    /// Evaluate one guess against the current secret.
    async fn submit_guess(&self, request: &GuessRequest) -> anyhow::Result<GuessReply>;
    /// Candidates consistent with all feedback so far, paged.
    async fn suggestions(&self, offset: usize, limit: usize) -> anyhow::Result<SuggestionPage>;
}
