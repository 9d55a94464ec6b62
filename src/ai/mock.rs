use async_trait::async_trait;

use super::{
    AiClient, ChatTurn, ProfileAnalysis, RoadmapDraft, RoadmapStepDraft, SentimentLabel,
    SentimentReport,
};
use crate::error::AppError;

/// Static stand-in used when no API key is configured. Keeps every surface
/// of the app usable offline.
pub struct MockAiClient;

#[async_trait]
impl AiClient for MockAiClient {
    async fn chat(&self, history: &[ChatTurn], _page_context: &str) -> Result<String, AppError> {
        let last = history
            .last()
            .map(|t| t.content.as_str())
            .unwrap_or_default();
        Ok(format!(
            "I can't reach the AI service right now, but here is a starting point: \
             break \"{}\" into one concrete step you can finish today.",
            last
        ))
    }

    async fn analyze_profile(&self, _profile_summary: &str) -> Result<ProfileAnalysis, AppError> {
        Ok(ProfileAnalysis {
            score: 72,
            strengths: vec![
                "Clear service offering".to_string(),
                "Relevant project history".to_string(),
            ],
            suggestions: vec![
                "Add measurable outcomes to past projects".to_string(),
                "Tighten the headline to one niche".to_string(),
            ],
        })
    }

    async fn generate_roadmap(&self, goal: &str, _skills: &[String]) -> Result<RoadmapDraft, AppError> {
        Ok(RoadmapDraft {
            steps: vec![
                RoadmapStepDraft {
                    title: format!("Scope: {}", goal),
                    description: "Pin down what done looks like and who it serves.".to_string(),
                    tasks: vec![
                        "Write a one-paragraph goal statement".to_string(),
                        "List three reference portfolios".to_string(),
                    ],
                },
                RoadmapStepDraft {
                    title: "Build the first deliverable".to_string(),
                    description: "Ship something small end to end.".to_string(),
                    tasks: vec![
                        "Pick one project idea".to_string(),
                        "Publish a write-up".to_string(),
                    ],
                },
                RoadmapStepDraft {
                    title: "Get feedback".to_string(),
                    description: "Put the work in front of a mentor and iterate.".to_string(),
                    tasks: vec![
                        "Book a review session".to_string(),
                        "Apply the top two suggestions".to_string(),
                    ],
                },
            ],
        })
    }

    async fn draft_proposal(&self, project_brief: &str) -> Result<String, AppError> {
        Ok(format!(
            "Hi — I read your brief ({}) and I can deliver this in two milestones: \
             a working first cut within a week, then polish based on your feedback. \
             Happy to walk through my approach on a short call.",
            project_brief.chars().take(60).collect::<String>()
        ))
    }

    async fn portfolio_copy(&self, _profile_summary: &str) -> Result<String, AppError> {
        Ok("I help teams ship the work they keep postponing. My projects pair a \
            clear scope with weekly, visible progress.\n\nRecent clients kept me on \
            past the first contract because handoffs were documented and boring — \
            in the good way."
            .to_string())
    }

    async fn analyze_sentiment(&self, _text: &str) -> Result<SentimentReport, AppError> {
        Ok(SentimentReport {
            label: SentimentLabel::Neutral,
            score: 0.5,
        })
    }
}
