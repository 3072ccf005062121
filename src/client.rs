//! Async driver pairing a [`GameSession`] with a [`WordService`].

use crate::common::Key;
use crate::domain::GuessRequest;
use crate::protocol::WordService;
use crate::session::{GameSession, Request};

/// Runs session requests against a service, one round trip at a time.
///
/// Each operation drives its whole request chain (for example guess, then
/// suggestion refresh) before returning, so the session is only ever mutated
/// from the response handlers in between.
pub struct GameClient<S: WordService> {
    service: S,
    session: GameSession,
}

impl<S: WordService> GameClient<S> {
    pub fn new(service: S, session: GameSession) -> Self {
        Self { service, session }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub async fn start_new_game(&mut self) {
        let request = self.session.start_new_game();
        self.run(Some(request)).await;
    }

    /// Press a single key.
    pub async fn press(&mut self, key: Key) {
        let request = self.session.handle_key(key);
        self.run(request).await;
    }

    /// Press each character of `text` as a key, in order.
    pub async fn type_word(&mut self, text: &str) {
        for ch in text.chars() {
            self.press(Key::from(ch)).await;
        }
    }

    /// Submit a whole word typed into a text field.
    pub async fn submit_guess(&mut self, word: &str) {
        let request = self.session.submit_guess(word);
        self.run(request).await;
    }

    pub async fn select_suggestion(&mut self, index: usize) {
        let request = self.session.select_suggestion(index);
        self.run(request).await;
    }

    pub async fn load_more(&mut self) {
        let request = self.session.load_more_suggestions();
        self.run(request).await;
    }

    async fn run(&mut self, mut next: Option<Request>) {
        while let Some(request) = next.take() {
            next = self.execute(request).await;
        }
    }

    async fn execute(&mut self, request: Request) -> Option<Request> {
        match request {
            Request::NewGame => {
                let result = self.service.new_game().await;
                self.session.on_new_game(result)
            }
            Request::Guess { game, guess } => {
                let body = GuessRequest {
                    guess: guess.to_string(),
                    game,
                };
                let result = self.service.submit_guess(&body).await;
                self.session.on_guess(game, result)
            }
            Request::Suggestions { game, page } => {
                let result = self.service.suggestions(page.offset, page.limit).await;
                self.session.on_suggestions(game, page, result);
                None
            }
        }
    }
}
