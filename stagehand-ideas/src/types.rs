//! What the collaborator is asked for and what it returns

use crate::error::{IdeaError, Result};
use serde::{Deserialize, Serialize};

/// Most ideas one request may ask for
pub const MAX_IDEAS: u8 = 10;

/// Ideas per request unless asked otherwise
pub const DEFAULT_IDEA_COUNT: u8 = 3;

/// One generated content idea
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViralIdea {
    pub title: String,
    /// Step-by-step description of the piece
    pub concept: String,
    pub platform: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
}

/// A recurring theme for the artist's content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPillar {
    pub title: String,
    pub description: String,
    #[serde(rename = "exampleIdeas", default)]
    pub example_ideas: Vec<String>,
}

/// Input for idea generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaRequest {
    pub topic: String,
    /// Free text such as "TikTok" or "Instagram Reels"
    pub platform: String,
    pub count: u8,
}

impl IdeaRequest {
    pub fn new(topic: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            platform: platform.into(),
            count: DEFAULT_IDEA_COUNT,
        }
    }

    pub fn with_count(mut self, count: u8) -> Self {
        self.count = count;
        self
    }

    /// Reject the request before anything is sent
    pub fn validate(&self) -> Result<()> {
        if self.topic.trim().is_empty() {
            return Err(IdeaError::invalid_request("topic", "Enter a topic or idea."));
        }
        if self.platform.trim().is_empty() {
            return Err(IdeaError::invalid_request("platform", "Choose a platform."));
        }
        if !(1..=MAX_IDEAS).contains(&self.count) {
            return Err(IdeaError::invalid_request(
                "count",
                format!("Ask for between 1 and {MAX_IDEAS} ideas."),
            ));
        }
        Ok(())
    }
}

/// Reject a blank artist description
pub fn validate_about(about: &str) -> Result<()> {
    if about.trim().is_empty() {
        return Err(IdeaError::invalid_request(
            "about",
            "Briefly describe the artist to generate pillars.",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pillar_wire_name() {
        let pillar: ContentPillar = serde_json::from_value(json!({
            "title": "Roots",
            "description": "Where the sound comes from",
            "exampleIdeas": ["Childhood cassette tapes", "Hometown walk", "First synth"]
        }))
        .unwrap();

        assert_eq!(pillar.example_ideas.len(), 3);
        let back = serde_json::to_value(&pillar).unwrap();
        assert!(back.get("exampleIdeas").is_some());
    }

    #[test]
    fn test_request_validation() {
        assert!(IdeaRequest::new("summer tour", "TikTok").validate().is_ok());
        assert!(IdeaRequest::new("   ", "TikTok").validate().is_err());
        assert!(IdeaRequest::new("summer tour", "").validate().is_err());
        assert!(IdeaRequest::new("summer tour", "TikTok").with_count(0).validate().is_err());
        assert!(IdeaRequest::new("summer tour", "TikTok").with_count(11).validate().is_err());
        assert!(IdeaRequest::new("summer tour", "TikTok").with_count(10).validate().is_ok());
    }

    #[test]
    fn test_default_count() {
        assert_eq!(IdeaRequest::new("a", "b").count, DEFAULT_IDEA_COUNT);
    }

    #[test]
    fn test_blank_about_is_rejected() {
        assert!(validate_about("\n\t").is_err());
        assert!(validate_about("synth-pop from Caracas").is_ok());
    }
}
