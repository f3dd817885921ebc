//! Ollama-compatible chat client for test body generation.
//!
//! The orchestrator treats this as an opaque `generate(prompt) -> text`
//! call: any error here is recovered per test case with the fallback
//! body, never surfaced as a run failure.

use futures::StreamExt;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::LlmError;
use crate::models::LlmConfig;

/// LLM API client
pub struct LlmClient {
    client: Client,
    config: LlmConfig,
}

/// Chat message for the chat API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system".to_string(), content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_string(), content: content.into() }
    }
}

/// Generation options forwarded to the model
#[derive(Debug, Serialize)]
struct ChatOptions {
    num_predict: u32,
}

/// Request body for the chat endpoint
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    stream: bool,
    options: ChatOptions,
}

/// Response from the chat endpoint (streaming)
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    message: Option<ChatMessageResponse>,
    done: bool,
    #[serde(default)]
    total_duration: Option<u64>,
    #[serde(default)]
    eval_count: Option<u64>,
}

/// Message content in chat response
#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    #[serde(default)]
    role: String,
    #[serde(default)]
    content: String,
}

/// Truncate a log snippet to at most `max_chars` characters, always
/// cutting on a char boundary
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

impl LlmClient {
    /// Create a new client with the given configuration
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| LlmError::RequestFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Generate a response using the chat API.
    ///
    /// - `system_prompt`: optional system prompt for this request
    /// - `prompt`: the user prompt
    /// - `stream_to_stdout`: echo tokens to stdout as they arrive
    ///
    /// Returns the complete response text.
    pub async fn generate(
        &self,
        system_prompt: Option<&str>,
        prompt: &str,
        stream_to_stdout: bool,
    ) -> Result<String, LlmError> {
        let url = format!("{}/api/chat", self.config.url);

        let mut messages = Vec::new();
        if let Some(sys) = system_prompt {
            messages.push(ChatMessage::system(sys));
        }
        messages.push(ChatMessage::user(prompt));

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages,
            stream: true,
            options: ChatOptions {
                num_predict: self.config.max_tokens,
            },
        };

        debug!("Sending chat request to {}", url);
        debug!(
            "Using model: {}, max_tokens: {}",
            self.config.model, self.config.max_tokens
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    LlmError::ConnectionRefused(format!(
                        "Could not connect to LLM at {}. Is the server running?",
                        self.config.url
                    ))
                } else if e.is_timeout() {
                    LlmError::Timeout(self.config.timeout_seconds)
                } else {
                    LlmError::from(e)
                }
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::HttpError { status, message });
        }

        let mut full_response = String::new();
        let mut stream = response.bytes_stream();
        let mut buffer = String::new();
        let mut generation_done = false;
        let mut last_token_time = std::time::Instant::now();
        let stall_timeout = Duration::from_secs(120);

        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result.map_err(|e| LlmError::StreamError(e.to_string()))?;

            if last_token_time.elapsed() > stall_timeout {
                warn!("Generation stalled - no tokens received for {:?}", stall_timeout);
                return Err(LlmError::Timeout(stall_timeout.as_secs()));
            }

            // The server sends newline-delimited JSON
            let chunk_str = String::from_utf8_lossy(&chunk);
            buffer.push_str(&chunk_str);

            while let Some(newline_pos) = buffer.find('\n') {
                let line = buffer[..newline_pos].to_string();
                buffer = buffer[newline_pos + 1..].to_string();

                if line.is_empty() {
                    continue;
                }

                let parsed: ChatResponse = match serde_json::from_str(&line) {
                    Ok(p) => p,
                    Err(e) => {
                        // A parse error on a trailing chunk after content
                        // already arrived is safe to skip
                        if !full_response.is_empty() {
                            debug!("Ignoring parse error on final chunk: {}", e);
                            continue;
                        }
                        return Err(LlmError::ParseError(format!(
                            "Failed to parse: {} - {}",
                            truncate_chars(&line, 200),
                            e
                        )));
                    }
                };

                let content = parsed
                    .message
                    .as_ref()
                    .map(|m| m.content.as_str())
                    .unwrap_or("");
                full_response.push_str(content);
                last_token_time = std::time::Instant::now();

                if stream_to_stdout {
                    print!("{}", content);
                    io::stdout().flush().ok();
                }

                if parsed.done {
                    generation_done = true;
                    if stream_to_stdout {
                        println!();
                    }
                    if let Some(duration) = parsed.total_duration {
                        debug!("Generation completed in {}ms", duration / 1_000_000);
                    }
                    if let Some(count) = parsed.eval_count {
                        debug!("Tokens generated: {}", count);
                    }
                    break;
                }
            }

            if generation_done {
                break;
            }
        }

        info!("Generated {} characters", full_response.len());
        Ok(full_response)
    }

    /// Check if the LLM server is reachable
    pub async fn health_check(&self) -> Result<bool, LlmError> {
        let url = format!("{}/api/tags", self.config.url);

        let response = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    LlmError::ConnectionRefused(format!(
                        "Could not connect to LLM at {}",
                        self.config.url
                    ))
                } else {
                    LlmError::from(e)
                }
            })?;

        Ok(response.status().is_success())
    }
}
