use async_trait::async_trait;
use inoxviet_core::AppResult;

/// Speaker of one chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    /// The site visitor.
    User,
    /// The assistant.
    Assistant,
}

impl ChatRole {
    /// Returns the wire value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// One earlier message of the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    /// Speaker.
    pub role: ChatRole,
    /// Message text.
    pub content: String,
}

/// Request sent to the completion endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatCompletionRequest {
    /// Composed system prompt.
    pub system_prompt: String,
    /// The visitor's new message.
    pub message: String,
    /// Prior turns, oldest first.
    pub history: Vec<ChatTurn>,
}

/// Port for the external chat-completion endpoint.
#[async_trait]
pub trait ChatCompletionClient: Send + Sync {
    /// Returns the assistant's reply text.
    async fn complete(&self, request: ChatCompletionRequest) -> AppResult<String>;
}
