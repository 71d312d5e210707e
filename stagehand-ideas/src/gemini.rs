//! Gemini-backed generator
//!
//! Calls the `generateContent` REST endpoint in JSON response mode with a
//! response schema, then parses the first candidate's text. Failures are
//! returned as they happen; nothing is retried.

use crate::error::{IdeaError, Result};
use crate::prompt::PromptBuilder;
use crate::types::{validate_about, ContentPillar, IdeaRequest, ViralIdea};
use crate::IdeaGenerator;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use stagehand_config::{AiSettings, ArtistSettings, StagehandConfig};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Header carrying the API key
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Idea generator talking to the Gemini API
#[derive(Debug, Clone)]
pub struct GeminiGenerator {
    client: Client,
    settings: AiSettings,
    artist: ArtistSettings,
}

impl GeminiGenerator {
    pub fn new(settings: AiSettings, artist: ArtistSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(concat!("stagehand/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            settings,
            artist,
        })
    }

    pub fn from_config(config: &StagehandConfig) -> Result<Self> {
        Self::new(config.ai.clone(), config.artist.clone())
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.model
        )
    }

    fn api_key(&self) -> Result<&str> {
        self.settings
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(IdeaError::MissingApiKey)
    }

    /// Send one prompt and decode the generated JSON text as `T`
    #[instrument(skip(self, prompt, schema), fields(model = %self.settings.model))]
    async fn generate<T: DeserializeOwned>(&self, prompt: String, schema: Value) -> Result<T> {
        let key = self.api_key()?;
        let body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema,
            },
        });

        debug!("Sending generation request");
        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Model service rejected the request");
            return Err(IdeaError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: GenerateResponse = response.json().await?;
        let text = envelope.text().ok_or(IdeaError::EmptyResponse)?;
        debug!(chars = text.len(), "Received generated text");

        Ok(serde_json::from_str(strip_code_fence(&text))?)
    }
}

#[async_trait]
impl IdeaGenerator for GeminiGenerator {
    async fn generate_ideas(&self, request: &IdeaRequest) -> Result<Vec<ViralIdea>> {
        request.validate()?;
        let prompt = PromptBuilder::new(&self.artist).ideas(request);
        let ideas: IdeasBody = self.generate(prompt, ideas_schema()).await?;
        Ok(ideas.ideas)
    }

    async fn generate_pillars(&self, about: &str) -> Result<Vec<ContentPillar>> {
        validate_about(about)?;
        let prompt = PromptBuilder::new(&self.artist).pillars(about);
        let pillars: PillarsBody = self.generate(prompt, pillars_schema()).await?;
        Ok(pillars.pillars)
    }
}

// =========================================================================
// Wire types
// =========================================================================

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateResponse {
    /// Text of the first candidate, parts joined
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct IdeasBody {
    #[serde(default)]
    ideas: Vec<ViralIdea>,
}

#[derive(Debug, Deserialize)]
struct PillarsBody {
    #[serde(default)]
    pillars: Vec<ContentPillar>,
}

/// Models occasionally wrap JSON in a markdown fence even in JSON mode
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

fn string_array(description: &str) -> Value {
    json!({ "type": "ARRAY", "items": { "type": "STRING" }, "description": description })
}

fn ideas_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "ideas": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": {
                            "type": "STRING",
                            "description": "A short, catchy title for the piece of content.",
                        },
                        "concept": {
                            "type": "STRING",
                            "description": "A detailed, step-by-step concept for the post.",
                        },
                        "platform": {
                            "type": "STRING",
                            "description": "The target social platform.",
                        },
                        "hashtags": string_array(
                            "Relevant trending hashtags, including one unique to the campaign.",
                        ),
                    },
                    "required": ["title", "concept", "platform", "hashtags"],
                },
            },
        },
    })
}

fn pillars_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "pillars": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": {
                            "type": "STRING",
                            "description": "The pillar's title.",
                        },
                        "description": {
                            "type": "STRING",
                            "description": "What the pillar covers and why fans care.",
                        },
                        "exampleIdeas": string_array(
                            "Concrete content ideas that illustrate the pillar.",
                        ),
                    },
                    "required": ["title", "description", "exampleIdeas"],
                },
            },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint() {
        let settings = AiSettings {
            base_url: "http://localhost:9000/".into(),
            model: "gemini-test".into(),
            ..AiSettings::default()
        };
        let generator = GeminiGenerator::new(settings, ArtistSettings::default()).unwrap();
        assert_eq!(
            generator.endpoint(),
            "http://localhost:9000/v1beta/models/gemini-test:generateContent"
        );
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let settings = AiSettings {
            api_key: Some("  ".into()),
            ..AiSettings::default()
        };
        let generator = GeminiGenerator::new(settings, ArtistSettings::default()).unwrap();
        assert!(matches!(generator.api_key(), Err(IdeaError::MissingApiKey)));
    }

    #[test]
    fn test_response_text_joins_first_candidate_parts() {
        let response: GenerateResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "{\"ideas\":" }, { "text": "[]}" }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }))
        .unwrap();
        assert_eq!(response.text().as_deref(), Some("{\"ideas\":[]}"));

        let empty: GenerateResponse = serde_json::from_value(json!({ "candidates": [] })).unwrap();
        assert_eq!(empty.text(), None);
    }

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("  {\"a\":1} "), "{\"a\":1}");
    }

    #[test]
    fn test_schemas_require_every_field() {
        let ideas = ideas_schema();
        assert_eq!(
            ideas["properties"]["ideas"]["items"]["required"],
            json!(["title", "concept", "platform", "hashtags"])
        );
        let pillars = pillars_schema();
        assert_eq!(
            pillars["properties"]["pillars"]["items"]["properties"]["exampleIdeas"]["type"],
            "ARRAY"
        );
    }
}
