use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::domain::{ErrorBody, GuessReply, GuessRequest, GuessResponse, NewGameResponse, SuggestionPage};
use crate::protocol::WordService;

/// Default timeout for a single request (30 seconds).
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// JSON-over-HTTP client for the word-evaluation server.
///
/// The server keys its game state on a session cookie, so the underlying
/// client keeps a cookie store for its whole lifetime.
pub struct HttpService {
    http: Client,
    base_url: String,
}

impl HttpService {
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("HTTP client setup failed: {}", e))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait::async_trait]
impl WordService for HttpService {
    async fn new_game(&self) -> anyhow::Result<NewGameResponse> {
        let res = self.http.post(self.url("new_game")).send().await?;
        let status = res.status();
        let body = res.text().await?;
        decode_new_game(status, &body)
    }

    async fn submit_guess(&self, request: &GuessRequest) -> anyhow::Result<GuessReply> {
        let res = self
            .http
            .post(self.url("guess"))
            .json(request)
            .send()
            .await?;
        let status = res.status();
        let body = res.text().await?;
        decode_guess(status, &body)
    }

    async fn suggestions(&self, offset: usize, limit: usize) -> anyhow::Result<SuggestionPage> {
        let res = self
            .http
            .get(self.url("suggestions"))
            .query(&[("offset", offset), ("limit", limit)])
            .send()
            .await?;
        let status = res.status();
        let body = res.text().await?;
        decode_suggestions(status, &body)
    }
}

fn unexpected(status: StatusCode, body: &str) -> anyhow::Error {
    anyhow::anyhow!("unexpected status: {} body={}", status, body)
}

/// Decode the start-game response.
pub fn decode_new_game(status: StatusCode, body: &str) -> anyhow::Result<NewGameResponse> {
    if !status.is_success() {
        return Err(unexpected(status, body));
    }
    serde_json::from_str(body).map_err(|e| anyhow::anyhow!("Deserialization error: {}", e))
}

/// Decode a guess response; HTTP 400 carries a player-facing rejection.
pub fn decode_guess(status: StatusCode, body: &str) -> anyhow::Result<GuessReply> {
    if status == StatusCode::BAD_REQUEST {
        let rejected: ErrorBody = serde_json::from_str(body)
            .map_err(|e| anyhow::anyhow!("Deserialization error: {}", e))?;
        return Ok(GuessReply::Rejected {
            error: rejected.error,
        });
    }
    if !status.is_success() {
        return Err(unexpected(status, body));
    }
    let accepted: GuessResponse =
        serde_json::from_str(body).map_err(|e| anyhow::anyhow!("Deserialization error: {}", e))?;
    Ok(GuessReply::Accepted(accepted))
}

/// Decode a suggestion page.
pub fn decode_suggestions(status: StatusCode, body: &str) -> anyhow::Result<SuggestionPage> {
    if !status.is_success() {
        return Err(unexpected(status, body));
    }
    serde_json::from_str(body).map_err(|e| anyhow::anyhow!("Deserialization error: {}", e))
}
