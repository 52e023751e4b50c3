//! FAQ chatbot — first-match keyword rules over a static answer table.

pub mod handlers;
pub mod rules;

use serde::Serialize;

use crate::chatbot::rules::{ChatRule, DEFAULT_RESPONSE, DEFAULT_TOPIC, RULES};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatReply {
    pub topic: &'static str,
    pub response: &'static str,
}

/// Picks the answer for a message. Matching is a plain case-insensitive
/// substring test, so short keywords also fire inside longer words.
pub fn respond(message: &str) -> ChatReply {
    respond_with(RULES, message)
}

fn respond_with(rules: &[ChatRule], message: &str) -> ChatReply {
    let lower = message.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| lower.contains(kw)))
        .map(|rule| ChatReply {
            topic: rule.topic,
            response: rule.response,
        })
        .unwrap_or(ChatReply {
            topic: DEFAULT_TOPIC,
            response: DEFAULT_RESPONSE,
        })
}
