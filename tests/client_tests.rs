use std::sync::Mutex;

use wordle_client::protocol::WordService;
use wordle_client::session::{MSG_FAILURE, MSG_WON};
use wordle_client::{
    GameClient, GameSession, GuessReply, GuessRequest, GuessResponse, InMemoryService, Key,
    Lifecycle, Mark, NewGameResponse, Phase, SuggestionPage,
};

const WORDS: &[&str] = &[
    "ADIEU", "CRANE", "DRIFT", "DRINK", "BRISK", "PRINT", "GRIND", "SLATE", "THREE", "OPIUM",
    "FLOOR", "MOUSY",
];

/// Service answering every guess from a fixed script.
struct ScriptedService {
    replies: Mutex<Vec<anyhow::Result<GuessReply>>>,
    guesses: Mutex<Vec<GuessRequest>>,
    pages: Mutex<Vec<(usize, usize)>>,
}

impl ScriptedService {
    fn new(mut replies: Vec<anyhow::Result<GuessReply>>) -> Self {
        replies.reverse();
        Self {
            replies: Mutex::new(replies),
            guesses: Mutex::new(Vec::new()),
            pages: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl WordService for ScriptedService {
    async fn new_game(&self) -> anyhow::Result<NewGameResponse> {
        Ok(NewGameResponse {
            status: "new_game".to_string(),
        })
    }

    async fn submit_guess(&self, request: &GuessRequest) -> anyhow::Result<GuessReply> {
        self.guesses.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| Err(anyhow::anyhow!("script exhausted")))
    }

    async fn suggestions(&self, offset: usize, limit: usize) -> anyhow::Result<SuggestionPage> {
        self.pages.lock().unwrap().push((offset, limit));
        Ok(SuggestionPage::default())
    }
}

/// Delegates to an in-memory game but fails every suggestion fetch after the first.
struct FlakySuggestions {
    inner: InMemoryService,
    served: Mutex<usize>,
}

#[async_trait::async_trait]
impl WordService for FlakySuggestions {
    async fn new_game(&self) -> anyhow::Result<NewGameResponse> {
        self.inner.new_game().await
    }

    async fn submit_guess(&self, request: &GuessRequest) -> anyhow::Result<GuessReply> {
        self.inner.submit_guess(request).await
    }

    async fn suggestions(&self, offset: usize, limit: usize) -> anyhow::Result<SuggestionPage> {
        let served = {
            let mut served = self.served.lock().unwrap();
            *served += 1;
            *served
        };
        if served > 1 {
            anyhow::bail!("suggestion backend down");
        }
        self.inner.suggestions(offset, limit).await
    }
}

fn feedback(code: &str) -> anyhow::Result<GuessReply> {
    Ok(GuessReply::Accepted(GuessResponse {
        feedback: code.to_string(),
        ..Default::default()
    }))
}

#[tokio::test]
async fn test_adieu_round_trip() -> anyhow::Result<()> {
    let service = InMemoryService::with_secret(WORDS, "DRIFT")?;
    let mut client = GameClient::new(service, GameSession::with_page_limit(3));
    client.start_new_game().await;
    assert_eq!(client.session().suggestions().count(), WORDS.len());
    assert_eq!(client.session().suggestions().words().len(), 3);

    client.type_word("adieu\n").await;

    let board = client.session().board();
    let marks: Vec<Mark> = board.rows()[0].iter().map(|c| c.mark).collect();
    assert_eq!(
        marks,
        vec![Mark::Absent, Mark::Present, Mark::Correct, Mark::Absent, Mark::Absent]
    );
    assert_eq!(board.cursor(), (1, 0));
    // DRIFT, DRINK and GRIND all score _YG__ for ADIEU
    assert_eq!(client.session().suggestions().count(), 3);
    assert_eq!(
        client.session().suggestions().words(),
        &["DRIFT".to_string(), "DRINK".to_string(), "GRIND".to_string()]
    );
    Ok(())
}

#[tokio::test]
async fn test_pick_suggestion_wins() -> anyhow::Result<()> {
    let service = InMemoryService::with_secret(WORDS, "DRIFT")?;
    let mut client = GameClient::new(service, GameSession::default());
    client.start_new_game().await;
    client.submit_guess("ADIEU").await;
    client.select_suggestion(0).await;

    let session = client.session();
    assert_eq!(session.board().lifecycle(), Lifecycle::Won);
    assert_eq!(session.message(), Some(MSG_WON));
    assert!(session.play_again_offered());
    assert!(session.suggestions().words().is_empty());

    client.press(Key::Letter('A')).await;
    assert_eq!(client.session().board().cursor(), (2, 0));
    Ok(())
}

#[tokio::test]
async fn test_unknown_word_rejected_by_service() -> anyhow::Result<()> {
    let service = InMemoryService::with_secret(WORDS, "DRIFT")?;
    let mut client = GameClient::new(service, GameSession::default());
    client.start_new_game().await;
    client.type_word("ZZZZZ\n").await;

    let session = client.session();
    assert_eq!(session.message(), Some("Invalid guess"));
    assert_eq!(session.board().phase(), Phase::Editing { row: 0, col: 5 });
    assert_eq!(session.board().cell(0, 0).letter, Some('Z'));
    Ok(())
}

#[tokio::test]
async fn test_six_misses_lose_and_reveal() -> anyhow::Result<()> {
    let service = InMemoryService::with_secret(WORDS, "MOUSY")?;
    let mut client = GameClient::new(service, GameSession::default());
    client.start_new_game().await;
    for word in ["CRANE", "DRIFT", "BRISK", "PRINT", "GRIND", "THREE"] {
        client.submit_guess(word).await;
    }
    let session = client.session();
    assert_eq!(session.board().lifecycle(), Lifecycle::Lost);
    assert_eq!(session.message(), Some("Game over! The word was MOUSY"));

    client.start_new_game().await;
    let session = client.session();
    assert_eq!(session.board().lifecycle(), Lifecycle::Active);
    assert_eq!(session.board().cursor(), (0, 0));
    assert_eq!(session.message(), None);
    assert!(!session.play_again_offered());
    Ok(())
}

#[tokio::test]
async fn test_load_more_walks_all_pages() -> anyhow::Result<()> {
    let service = InMemoryService::with_secret(WORDS, "DRIFT")?;
    let mut client = GameClient::new(service, GameSession::with_page_limit(5));
    client.start_new_game().await;
    for _ in 0..10 {
        client.load_more().await;
    }
    let suggestions = client.session().suggestions();
    assert_eq!(suggestions.words().len(), WORDS.len());
    assert_eq!(suggestions.words()[11], "MOUSY");
    assert!(!suggestions.has_more());
    Ok(())
}

#[tokio::test]
async fn test_all_green_without_flag_does_not_win() {
    let replies = (0..6).map(|_| feedback("GGGGG")).collect();
    let mut client = GameClient::new(ScriptedService::new(replies), GameSession::default());
    client.start_new_game().await;
    for _ in 0..6 {
        client.type_word("CRANE\n").await;
    }
    let session = client.session();
    assert_eq!(session.board().cursor(), (6, 0));
    assert_eq!(session.board().phase(), Phase::Frozen);
    assert_eq!(session.board().lifecycle(), Lifecycle::Active);
    assert_eq!(session.message(), None);
    assert_eq!(client.service().guesses.lock().unwrap().len(), 6);
}

#[tokio::test]
async fn test_requests_carry_game_token_and_refresh_from_zero() {
    let replies = vec![feedback("_____"), feedback("_Y___")];
    let mut client = GameClient::new(ScriptedService::new(replies), GameSession::default());
    client.start_new_game().await;
    client.submit_guess("CRANE").await;
    client.start_new_game().await;
    client.submit_guess("SLATE").await;

    let guesses = client.service().guesses.lock().unwrap().clone();
    assert_eq!(guesses[0].guess, "CRANE");
    assert_eq!(guesses[0].game, 1);
    assert_eq!(guesses[1].guess, "SLATE");
    assert_eq!(guesses[1].game, 2);

    let pages = client.service().pages.lock().unwrap().clone();
    assert_eq!(pages, vec![(0, 10); 4]);
}

#[tokio::test]
async fn test_transport_failure_does_not_commit() {
    let replies = vec![Err(anyhow::anyhow!("connection reset")), feedback("G____")];
    let mut client = GameClient::new(ScriptedService::new(replies), GameSession::default());
    client.start_new_game().await;
    client.type_word("CRANE\n").await;
    assert_eq!(client.session().message(), Some(MSG_FAILURE));
    assert_eq!(client.session().board().committed_rows(), 0);

    // the same row can be resubmitted as is
    client.press(Key::Enter).await;
    assert_eq!(client.session().board().committed_rows(), 1);
    assert_eq!(client.session().message(), None);
}

#[tokio::test]
async fn test_win_message_kept_when_refresh_fails() -> anyhow::Result<()> {
    let service = FlakySuggestions {
        inner: InMemoryService::with_secret(WORDS, "DRIFT")?,
        served: Mutex::new(0),
    };
    let mut client = GameClient::new(service, GameSession::default());
    client.start_new_game().await;
    client.submit_guess("DRIFT").await;

    let session = client.session();
    assert_eq!(session.board().lifecycle(), Lifecycle::Won);
    assert_eq!(session.message(), Some(MSG_WON));
    assert!(session.play_again_offered());
    assert_eq!(*client.service().served.lock().unwrap(), 2);
    Ok(())
}
