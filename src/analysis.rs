//! Remote CV analysis through a chat-completion endpoint.
//!
//! One request per uploaded document: a fixed HR-reviewer prompt with the
//! extracted CV text embedded, sent to the Hugging Face router's
//! OpenAI-compatible API. No retries; a failed call surfaces its error text
//! in the reply to the user.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Hugging Face router, OpenAI-compatible chat completions
const API_BASE: &str = "https://router.huggingface.co/v1";

/// Upper bound on tokens generated for one analysis
const MAX_COMPLETION_TOKENS: u32 = 1024;

/// Fixed sampling temperature for every analysis call
const TEMPERATURE: f32 = 0.7;

/// Telegram rejects messages over 4096 characters; the analysis body is
/// capped below that to leave room for the header line.
pub const MAX_REPLY_CHARS: usize = 4000;

/// Custom error types for the remote analysis call
#[derive(Debug, Clone)]
pub enum AnalysisError {
    /// Request never reached the API or the connection dropped
    Network(String),
    /// API answered with a non-success status
    Api(String),
    /// API answered but the body could not be decoded
    Parse(String),
    /// API answered with no completion choices
    EmptyResponse,
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisError::Network(msg) => write!(f, "Network error: {msg}"),
            AnalysisError::Api(msg) => write!(f, "API error: {msg}"),
            AnalysisError::Parse(msg) => write!(f, "Parse error: {msg}"),
            AnalysisError::EmptyResponse => write!(f, "API returned no completion choices"),
        }
    }
}

impl std::error::Error for AnalysisError {}

/// API request structure
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

/// A single chat message
#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// API response structure
#[derive(Deserialize, Debug)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// Choice in response
#[derive(Deserialize, Debug)]
struct ChatChoice {
    message: ResponseMessage,
}

/// Response message
#[derive(Deserialize, Debug)]
struct ResponseMessage {
    content: String,
}

/// Client for the remote completion endpoint
pub struct AnalysisClient {
    api_key: String,
    client: Client,
    model: String,
}

impl AnalysisClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            client: Client::new(),
            model: model.into(),
        }
    }

    fn chat_url(&self) -> String {
        format!("{API_BASE}/chat/completions")
    }

    /// Run one analysis of the extracted CV text.
    ///
    /// Exactly one call, no retry. The caller must pass non-empty text;
    /// empty documents are rejected before reaching this point.
    pub async fn analyze(&self, cv_text: &str) -> Result<String, AnalysisError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: build_prompt(cv_text),
            }],
            max_tokens: MAX_COMPLETION_TOKENS,
            temperature: TEMPERATURE,
        };

        debug!(model = %self.model, prompt_chars = request.messages[0].content.len(), "Sending analysis request");

        let response = self
            .client
            .post(self.chat_url())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| AnalysisError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::Api(format!("status: {status}, body: {body}")));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::Parse(e.to_string()))?;

        let choice = chat_response
            .choices
            .into_iter()
            .next()
            .ok_or(AnalysisError::EmptyResponse)?;

        info!(analysis_chars = choice.message.content.len(), "Analysis completed");

        Ok(choice.message.content)
    }
}

/// Build the fixed analysis prompt around the extracted CV text.
pub fn build_prompt(cv_text: &str) -> String {
    format!(
        "أنت خبير موارد بشرية في السوق العربي. حلّل السيرة الذاتية التالية:\n\n\
         {cv_text}\n\n\
         قدّم:\n\
         - نقاط القوة\n\
         - نقاط الضعف\n\
         - توصيات عملية\n\
         - ملاحظة ختامية احترافية\n\n\
         اكتب بالعربية الفصحى."
    )
}

/// Cap a reply at `max_chars` characters without splitting a multi-byte
/// character.
pub fn truncate_reply(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
