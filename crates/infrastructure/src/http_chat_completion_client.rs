use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use inoxviet_application::{ChatCompletionClient, ChatCompletionRequest, ChatRole};
use inoxviet_core::{AppError, AppResult};


/// Chat completion client speaking the common `messages`/`choices` JSON shape.
pub struct HttpChatCompletionClient {
    http_client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    model: Option<String>,
}

impl HttpChatCompletionClient {
    /// Creates a client for the given endpoint.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        model: Option<String>,
        timeout: Duration,
    ) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| {
                AppError::Internal(format!("failed to build chat completion client: {error}"))
            })?;

        Ok(Self {
            http_client,
            endpoint: endpoint.into(),
            api_key,
            model,
        })
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct CompletionBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    messages: Vec<CompletionMessage<'a>>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct CompletionMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionReply,
}

#[derive(Debug, Deserialize)]
struct CompletionReply {
    content: String,
}

fn completion_body<'a>(
    model: Option<&'a str>,
    request: &'a ChatCompletionRequest,
) -> CompletionBody<'a> {
    let mut messages = Vec::with_capacity(request.history.len() + 2);
    messages.push(CompletionMessage {
        role: "system",
        content: request.system_prompt.as_str(),
    });
    messages.extend(request.history.iter().map(|turn| CompletionMessage {
        role: turn.role.as_str(),
        content: turn.content.as_str(),
    }));
    messages.push(CompletionMessage {
        role: ChatRole::User.as_str(),
        content: request.message.as_str(),
    });

    CompletionBody { model, messages }
}

fn reply_text(response: CompletionResponse) -> AppResult<String> {
    response
        .choices
        .into_iter()
        .map(|choice| choice.message.content.trim().to_owned())
        .find(|content| !content.is_empty())
        .ok_or_else(|| AppError::Internal("chat completion returned no reply".to_owned()))
}

#[async_trait]
impl ChatCompletionClient for HttpChatCompletionClient {
    async fn complete(&self, request: ChatCompletionRequest) -> AppResult<String> {
        let body = completion_body(self.model.as_deref(), &request);
        let mut builder = self.http_client.post(self.endpoint.as_str()).json(&body);
        if let Some(api_key) = &self.api_key {
            builder = builder.bearer_auth(api_key);
        }

        let response = builder.send().await.map_err(|error| {
            AppError::Internal(format!("chat completion transport error: {error}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<response body unavailable>".to_owned());
            warn!(%status, "chat completion endpoint rejected the request");
            return Err(AppError::Internal(format!(
                "chat completion failed with status {status}: {body}"
            )));
        }

        let parsed = response.json::<CompletionResponse>().await.map_err(|error| {
            AppError::Internal(format!("chat completion response is malformed: {error}"))
        })?;
        debug!(choices = parsed.choices.len(), "chat completion received");

        reply_text(parsed)
    }
}
