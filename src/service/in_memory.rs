use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tokio::sync::Mutex;

use crate::common::Word;
use crate::config::{NEW_GAME_STATUS, ROWS};
use crate::domain::{Attempt, GuessReply, GuessRequest, GuessResponse, NewGameResponse, SuggestionPage};
use crate::feedback::Feedback;
use crate::protocol::WordService;

const INVALID_GUESS: &str = "Invalid guess";
const NO_ACTIVE_GAME: &str = "No active game";

struct Game {
    secret: Word,
    attempts: Vec<(Word, Feedback)>,
    won: bool,
    lost: bool,
}

struct State {
    rng: SmallRng,
    fixed_secret: Option<Word>,
    game: Option<Game>,
}

/// Word-evaluation service held entirely in memory.
///
/// Evaluates guesses against a secret drawn from the supplied word list and
/// pages the words still consistent with every recorded attempt, in list
/// order.
pub struct InMemoryService {
    words: Vec<Word>,
    state: Mutex<State>,
}

impl InMemoryService {
    /// Service drawing secrets at random. Entries that are not 5-letter words are skipped.
    pub fn new<S: AsRef<str>>(words: &[S]) -> Self {
        let mut seed_rng = rand::rng();
        Self::build(words, SmallRng::from_rng(&mut seed_rng), None)
    }

    /// Reproducible secret selection.
    pub fn with_seed<S: AsRef<str>>(words: &[S], seed: u64) -> Self {
        Self::build(words, SmallRng::seed_from_u64(seed), None)
    }

    /// Every new game uses `secret`.
    pub fn with_secret<S: AsRef<str>>(words: &[S], secret: &str) -> anyhow::Result<Self> {
        let secret = Word::parse(secret).map_err(|e| anyhow::anyhow!(e))?;
        Ok(Self::build(words, SmallRng::seed_from_u64(0), Some(secret)))
    }

    fn build<S: AsRef<str>>(words: &[S], rng: SmallRng, fixed_secret: Option<Word>) -> Self {
        let words = words
            .iter()
            .filter_map(|w| Word::parse(w.as_ref()).ok())
            .collect();
        Self {
            words,
            state: Mutex::new(State {
                rng,
                fixed_secret,
                game: None,
            }),
        }
    }

    /// Secret of the current game, if one is running.
    pub async fn secret(&self) -> Option<Word> {
        self.state.lock().await.game.as_ref().map(|g| g.secret)
    }
}

#[async_trait::async_trait]
impl WordService for InMemoryService {
    async fn new_game(&self) -> anyhow::Result<NewGameResponse> {
        let mut guard = self.state.lock().await;
        let state = &mut *guard;
        let secret = match state.fixed_secret {
            Some(secret) => secret,
            None => {
                if self.words.is_empty() {
                    return Err(anyhow::anyhow!("word list is empty"));
                }
                let idx = state.rng.random_range(0..self.words.len());
                self.words[idx]
            }
        };
        state.game = Some(Game {
            secret,
            attempts: Vec::new(),
            won: false,
            lost: false,
        });
        Ok(NewGameResponse {
            status: NEW_GAME_STATUS.to_string(),
        })
    }

    async fn submit_guess(&self, request: &GuessRequest) -> anyhow::Result<GuessReply> {
        let guess = match Word::parse(&request.guess) {
            Ok(word) if self.words.contains(&word) => word,
            _ => {
                return Ok(GuessReply::Rejected {
                    error: INVALID_GUESS.to_string(),
                })
            }
        };
        let mut guard = self.state.lock().await;
        let game = match guard.game.as_mut() {
            Some(game) if !game.won && !game.lost => game,
            _ => {
                return Ok(GuessReply::Rejected {
                    error: NO_ACTIVE_GAME.to_string(),
                })
            }
        };

        let feedback = Feedback::score(&game.secret, &guess);
        game.attempts.push((guess, feedback));
        if guess == game.secret {
            game.won = true;
        } else if game.attempts.len() >= ROWS {
            game.lost = true;
        }

        Ok(GuessReply::Accepted(GuessResponse {
            feedback: feedback.code(),
            won: game.won,
            lost: game.lost,
            secret: game.lost.then(|| game.secret.to_string()),
            attempts: game
                .attempts
                .iter()
                .map(|(word, fb)| Attempt {
                    guess: word.to_string(),
                    feedback: fb.code(),
                })
                .collect(),
        }))
    }

    async fn suggestions(&self, offset: usize, limit: usize) -> anyhow::Result<SuggestionPage> {
        let state = self.state.lock().await;
        let game = match state.game.as_ref() {
            Some(game) if !game.won && !game.lost => game,
            _ => return Ok(SuggestionPage::default()),
        };
        let candidates: Vec<&Word> = self
            .words
            .iter()
            .filter(|w| game.attempts.iter().all(|(g, fb)| fb.admits(w, g)))
            .collect();
        Ok(SuggestionPage {
            suggestions: candidates
                .iter()
                .skip(offset)
                .take(limit)
                .map(|w| w.to_string())
                .collect(),
            count: candidates.len(),
        })
    }
}
