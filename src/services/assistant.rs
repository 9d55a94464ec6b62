use std::sync::Arc;

use crate::ai::{AiClient, ChatRole, ChatTurn};
use crate::error::AppError;

/// Shown instead of a reply when the AI call fails and the caller opts for
/// the canned fallback.
pub const FALLBACK_REPLY: &str =
    "Sorry, I couldn't reach the assistant just now. Please try again.";

/// Chat widget backing state. The message history lives here only — nothing
/// is persisted — and the rolling history plus the current page context is
/// forwarded on every call.
pub struct ChatAssistant {
    ai: Arc<dyn AiClient>,
    history: Vec<ChatTurn>,
    page_context: String,
}

impl ChatAssistant {
    pub fn new(ai: Arc<dyn AiClient>) -> Self {
        Self {
            ai,
            history: Vec::new(),
            page_context: String::new(),
        }
    }

    /// The shell updates this on navigation so the assistant knows what the
    /// user is looking at.
    pub fn set_page_context(&mut self, context: impl Into<String>) {
        self.page_context = context.into();
    }

    pub fn history(&self) -> &[ChatTurn] {
        &self.history
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// One blocking request per turn. The user turn stays in the history
    /// even when the call fails, so a retry resends it.
    pub async fn send(&mut self, text: impl Into<String>) -> Result<String, AppError> {
        self.history.push(ChatTurn::new(ChatRole::User, text));

        let reply = self.ai.chat(&self.history, &self.page_context).await?;
        self.history
            .push(ChatTurn::new(ChatRole::Assistant, reply.clone()));
        Ok(reply)
    }

    /// Replace the last assistant message: truncate the history at the last
    /// assistant index and resubmit what precedes it.
    pub async fn regenerate(&mut self) -> Result<String, AppError> {
        let last_assistant = self
            .history
            .iter()
            .rposition(|t| t.role == ChatRole::Assistant)
            .ok_or_else(|| AppError::BadRequest("Nothing to regenerate".to_string()))?;

        self.history.truncate(last_assistant);

        let reply = self.ai.chat(&self.history, &self.page_context).await?;
        self.history
            .push(ChatTurn::new(ChatRole::Assistant, reply.clone()));
        Ok(reply)
    }
}
