//! # Stagehand Ideas
//!
//! The AI collaborator behind the idea and pillar generators. It turns a
//! topic (or a description of the artist) into content ideas through a
//! generative model, framed by the configured artist profile.
//!
//! - [`IdeaGenerator`] is the seam the presentation layer depends on
//! - [`GeminiGenerator`] implements it over the Gemini REST API
//! - [`Panel`] holds one panel's transient state; results never reach the board
//!
//! ```no_run
//! use stagehand_ideas::{GeminiGenerator, IdeaGenerator, IdeaRequest, Panel};
//!
//! # async fn demo() -> stagehand_ideas::Result<()> {
//! let config = stagehand_config::load_config().unwrap_or_default();
//! let generator = GeminiGenerator::from_config(&config)?;
//!
//! let mut panel = Panel::new();
//! panel
//!     .run(generator.generate_ideas(&IdeaRequest::new("new single", "TikTok")))
//!     .await;
//! # Ok(())
//! # }
//! ```

mod error;
pub mod gemini;
pub mod panel;
pub mod prompt;
pub mod types;

use async_trait::async_trait;

pub use error::{IdeaError, Result, GENERATION_FAILED};
pub use gemini::GeminiGenerator;
pub use panel::Panel;
pub use prompt::PromptBuilder;
pub use types::{ContentPillar, IdeaRequest, ViralIdea};

/// Source of generated content ideas
#[async_trait]
pub trait IdeaGenerator: Send + Sync {
    /// Ideas for `request.topic` on `request.platform`
    async fn generate_ideas(&self, request: &IdeaRequest) -> Result<Vec<ViralIdea>>;

    /// Content pillars for an artist described by `about`
    async fn generate_pillars(&self, about: &str) -> Result<Vec<ContentPillar>>;
}
