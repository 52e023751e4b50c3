use axum::Json;
use serde::Deserialize;
use tracing::debug;

use crate::chatbot::{respond, ChatReply};
use crate::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// POST /api/v1/chat
pub async fn handle_chat(Json(request): Json<ChatRequest>) -> Result<Json<ChatReply>, AppError> {
    let message = request.message.trim();
    if message.is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let reply = respond(message);
    debug!("Chat message answered with topic '{}'", reply.topic);
    Ok(Json(reply))
}
