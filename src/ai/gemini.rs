use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    AiClient, ChatRole, ChatTurn, ProfileAnalysis, RoadmapDraft, SentimentReport,
};
use crate::error::AppError;

const CHAT_SYSTEM: &str = "You are the MentorLink assistant. Help freelancers with \
    profiles, proposals, mentorship and career questions. Keep answers short and concrete.";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, base_url: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
            model,
        }
    }

    /// Single generate-content call. A schema, when given, constrains the
    /// reply to JSON matching it.
    async fn generate(
        &self,
        contents: Vec<Content>,
        system: Option<&str>,
        schema: Option<Value>,
    ) -> Result<String, AppError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let body = GenerateContentRequest {
            contents,
            system_instruction: system.map(|text| Content {
                role: None,
                parts: vec![Part {
                    text: text.to_string(),
                }],
            }),
            generation_config: schema.map(|response_schema| GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
            }),
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::Api {
                status,
                message: text,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| AppError::Ai("Empty generate response".to_string()))
    }

    async fn generate_prompt(&self, prompt: &str, schema: Option<Value>) -> Result<String, AppError> {
        let contents = vec![Content {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: prompt.to_string(),
            }],
        }];
        self.generate(contents, None, schema).await
    }
}

fn parse_typed<T: serde::de::DeserializeOwned>(text: &str) -> Result<T, AppError> {
    serde_json::from_str(text).map_err(|e| AppError::Ai(format!("Failed to parse AI reply: {}", e)))
}

#[async_trait]
impl AiClient for GeminiClient {
    async fn chat(&self, history: &[ChatTurn], page_context: &str) -> Result<String, AppError> {
        // The rolling history plus a page-context string travels on every
        // call; nothing is kept remotely between turns.
        let mut contents: Vec<Content> = history
            .iter()
            .map(|turn| Content {
                role: Some(
                    match turn.role {
                        ChatRole::User => "user",
                        ChatRole::Assistant => "model",
                    }
                    .to_string(),
                ),
                parts: vec![Part {
                    text: turn.content.clone(),
                }],
            })
            .collect();

        if !page_context.is_empty() {
            if let Some(first) = contents.first_mut() {
                first.parts.insert(
                    0,
                    Part {
                        text: format!("[Page context: {}]", page_context),
                    },
                );
            }
        }

        self.generate(contents, Some(CHAT_SYSTEM), None).await
    }

    async fn analyze_profile(&self, profile_summary: &str) -> Result<ProfileAnalysis, AppError> {
        let schema = serde_json::json!({
            "type": "object",
            "properties": {
                "score": { "type": "integer" },
                "strengths": { "type": "array", "items": { "type": "string" } },
                "suggestions": { "type": "array", "items": { "type": "string" } }
            },
            "required": ["score", "strengths", "suggestions"]
        });
        let prompt = format!(
            "Score this freelancer profile from 0 to 100 and list its strengths and \
             concrete improvement suggestions.\n\nProfile:\n{}",
            profile_summary
        );
        let text = self.generate_prompt(&prompt, Some(schema)).await?;
        parse_typed(&text)
    }

    async fn generate_roadmap(&self, goal: &str, skills: &[String]) -> Result<RoadmapDraft, AppError> {
        let schema = serde_json::json!({
            "type": "object",
            "properties": {
                "steps": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "title": { "type": "string" },
                            "description": { "type": "string" },
                            "tasks": { "type": "array", "items": { "type": "string" } }
                        },
                        "required": ["title", "description", "tasks"]
                    }
                }
            },
            "required": ["steps"]
        });
        let prompt = format!(
            "Draft a mentorship roadmap of 4-6 steps for the goal \"{}\". \
             Current skills: {}. Each step needs a title, a one-sentence description \
             and 2-4 tasks.",
            goal,
            skills.join(", ")
        );
        let text = self.generate_prompt(&prompt, Some(schema)).await?;
        parse_typed(&text)
    }

    async fn draft_proposal(&self, project_brief: &str) -> Result<String, AppError> {
        let prompt = format!(
            "Write a short, specific freelance proposal for this project brief. \
             No placeholders.\n\nBrief:\n{}",
            project_brief
        );
        self.generate_prompt(&prompt, None).await
    }

    async fn portfolio_copy(&self, profile_summary: &str) -> Result<String, AppError> {
        let prompt = format!(
            "Write a two-paragraph portfolio introduction for this freelancer.\n\n{}",
            profile_summary
        );
        self.generate_prompt(&prompt, None).await
    }

    async fn analyze_sentiment(&self, text: &str) -> Result<SentimentReport, AppError> {
        let schema = serde_json::json!({
            "type": "object",
            "properties": {
                "label": { "type": "string", "enum": ["positive", "neutral", "negative"] },
                "score": { "type": "number" }
            },
            "required": ["label", "score"]
        });
        let prompt = format!(
            "Classify the sentiment of this client feedback. Score is confidence \
             in [0,1].\n\n{}",
            text
        );
        let reply = self.generate_prompt(&prompt, Some(schema)).await?;
        parse_typed(&reply)
    }
}
