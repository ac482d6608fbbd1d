use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A prior turn of the conversation as the client saw it.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ChatTurn {
    /// Either `user` or `model`.
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ChatRequest {
    #[serde(default)]
    pub history: Vec<ChatTurn>,
    #[validate(length(min = 1, message = "Message is required"))]
    pub prompt: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChatReply {
    pub text: String,
}
