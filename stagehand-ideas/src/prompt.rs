//! Prompt text for the model, framed by the artist profile

use crate::types::IdeaRequest;
use stagehand_config::ArtistSettings;

/// Pillars asked for per generation
pub const PILLAR_COUNT: usize = 4;

/// Example ideas requested for every pillar
pub const EXAMPLES_PER_PILLAR: usize = 3;

/// Builds prompts for one artist
#[derive(Debug, Clone)]
pub struct PromptBuilder<'a> {
    artist: &'a ArtistSettings,
}

impl<'a> PromptBuilder<'a> {
    pub fn new(artist: &'a ArtistSettings) -> Self {
        Self { artist }
    }

    /// Prompt for `request.count` ideas on the requested platform
    pub fn ideas(&self, request: &IdeaRequest) -> String {
        let ArtistSettings {
            name,
            style,
            market,
        } = self.artist;

        format!(
            "Act as a viral marketing expert and social media strategist for an emerging \
             music artist called {name}. Their style is {style}.\n\
             The mission is to win over this audience: {market}.\n\
             Generate {count} distinct, innovative viral content ideas based on this \
             topic: \"{topic}\".\n\
             The target platform is {platform}. The ideas must be highly engaging and shareable, \
             and tailored to the platform's algorithm and to the audience's culture.\n\
             Focus on guerrilla marketing tactics, organic growth and a strong community \
             connection with local cultural references. Avoid generic ideas.",
            count = request.count,
            topic = request.topic.trim(),
            platform = request.platform.trim(),
        )
    }

    /// Prompt for the artist's content pillars, given a free-text description
    pub fn pillars(&self, about: &str) -> String {
        let ArtistSettings {
            name,
            style,
            market,
        } = self.artist;

        format!(
            "You are a brand strategist for music artists. Your client is {name}, a musician \
             whose style is {style}.\n\
             The main goal is to reach this audience and connect with it deeply: {market}.\n\
             Analyse this information about the artist: \"{about}\".\n\
             Based on it, define {PILLAR_COUNT} core content pillars for the brand, each with \
             {EXAMPLES_PER_PILLAR} concrete example ideas. Each pillar must be a recurring theme \
             that reinforces the artist's identity and connects with the audience.\n\
             Think of themes such as their roots, the creative process, the pop culture the \
             audience grew up with, and life as a musician.",
            about = about.trim(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artist() -> ArtistSettings {
        ArtistSettings {
            name: "Luna Vega".into(),
            style: "dream pop".into(),
            market: "Chile".into(),
        }
    }

    #[test]
    fn test_ideas_prompt_carries_profile_and_request() {
        let artist = artist();
        let request =
            IdeaRequest::new("  rainy day acoustic sessions ", "YouTube Shorts").with_count(5);

        let prompt = PromptBuilder::new(&artist).ideas(&request);

        assert!(prompt.contains("Luna Vega"));
        assert!(prompt.contains("dream pop"));
        assert!(prompt.contains("Chile"));
        assert!(prompt.contains("Generate 5 distinct"));
        assert!(prompt.contains("\"rainy day acoustic sessions\""));
        assert!(prompt.contains("The target platform is YouTube Shorts."));
    }

    #[test]
    fn test_pillars_prompt() {
        let artist = artist();
        let prompt = PromptBuilder::new(&artist).pillars("grew up on 80s cassettes");

        assert!(prompt.contains("define 4 core content pillars"));
        assert!(prompt.contains("\"grew up on 80s cassettes\""));
    }
}
