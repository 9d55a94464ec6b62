pub mod gemini;
pub mod mock;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::AiConfig;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAnalysis {
    pub score: i32,
    pub strengths: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapDraft {
    pub steps: Vec<RoadmapStepDraft>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapStepDraft {
    pub title: String,
    pub description: String,
    pub tasks: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentReport {
    pub label: SentimentLabel,
    pub score: f64,
}

/// Third-party generative-AI proxy. Each operation is a single blocking
/// request/response; no streaming.
#[async_trait]
pub trait AiClient: Send + Sync {
    async fn chat(&self, history: &[ChatTurn], page_context: &str) -> Result<String, AppError>;
    async fn analyze_profile(&self, profile_summary: &str) -> Result<ProfileAnalysis, AppError>;
    async fn generate_roadmap(&self, goal: &str, skills: &[String]) -> Result<RoadmapDraft, AppError>;
    async fn draft_proposal(&self, project_brief: &str) -> Result<String, AppError>;
    async fn portfolio_copy(&self, profile_summary: &str) -> Result<String, AppError>;
    async fn analyze_sentiment(&self, text: &str) -> Result<SentimentReport, AppError>;
}

/// Pick the real client when a key is configured, the canned one otherwise.
pub fn client_from_config(config: &AiConfig) -> Arc<dyn AiClient> {
    match &config.api_key {
        Some(key) => Arc::new(gemini::GeminiClient::new(
            key.clone(),
            config.base_url.clone(),
            config.model.clone(),
        )),
        None => {
            info!("AI_API_KEY not set, using mock AI responses");
            Arc::new(mock::MockAiClient)
        }
    }
}
