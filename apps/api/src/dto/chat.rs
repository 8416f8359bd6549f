use inoxviet_application::{ChatRole, ChatTurn};
use inoxviet_core::AppError;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One earlier chat message sent back by the widget.
#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct ChatTurnRequest {
    pub role: String,
    pub content: String,
}

impl TryFrom<ChatTurnRequest> for ChatTurn {
    type Error = AppError;

    fn try_from(value: ChatTurnRequest) -> Result<Self, Self::Error> {
        let role = match value.role.as_str() {
            "user" => ChatRole::User,
            "assistant" => ChatRole::Assistant,
            other => {
                return Err(AppError::Validation(format!("unknown chat role '{other}'")));
            }
        };

        Ok(Self {
            role,
            content: value.content,
        })
    }
}

/// Incoming chat widget message.
#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatTurnRequest>,
}

/// Assistant reply.
#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct ChatReplyResponse {
    pub reply: String,
}
