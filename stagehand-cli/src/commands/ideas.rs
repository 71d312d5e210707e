//! `ideas` and `pillars`

use crate::display::{create_table, print_json};
use anyhow::{bail, Result};
use stagehand_config::StagehandConfig;
use stagehand_ideas::{ContentPillar, GeminiGenerator, IdeaGenerator, IdeaRequest, Panel, ViralIdea};

pub async fn execute_ideas(
    topic: String,
    platform: String,
    count: u8,
    config: &StagehandConfig,
    json: bool,
) -> Result<()> {
    let generator = GeminiGenerator::from_config(config)?;
    let request = IdeaRequest::new(topic, platform).with_count(count);

    let mut panel: Panel<ViralIdea> = Panel::new();
    panel.run(generator.generate_ideas(&request)).await;

    if let Some(message) = panel.error() {
        bail!("{message}");
    }
    if json {
        return print_json(panel.items());
    }

    let headers = vec!["Idea", "Concept", "Platform", "Hashtags"];
    let table = create_table(panel.items(), headers, |idea| {
        vec![
            idea.title.clone(),
            idea.concept.clone(),
            idea.platform.clone(),
            idea.hashtags.join(" "),
        ]
    });
    println!("{table}");
    Ok(())
}

pub async fn execute_pillars(about: &str, config: &StagehandConfig, json: bool) -> Result<()> {
    let generator = GeminiGenerator::from_config(config)?;

    let mut panel: Panel<ContentPillar> = Panel::new();
    panel.run(generator.generate_pillars(about)).await;

    if let Some(message) = panel.error() {
        bail!("{message}");
    }
    if json {
        return print_json(panel.items());
    }

    let table = create_table(panel.items(), vec!["Pillar", "Description", "Examples"], |pillar| {
        vec![
            pillar.title.clone(),
            pillar.description.clone(),
            pillar
                .example_ideas
                .iter()
                .map(|idea| format!("- {idea}"))
                .collect::<Vec<_>>()
                .join("\n"),
        ]
    });
    println!("{table}");
    Ok(())
}
