//! `analytics`

use crate::display::{create_table, print_json};
use anyhow::Result;
use stagehand_board::analytics::{Dashboard, DataPoint};
use stagehand_board::BoardContext;
use stagehand_config::StagehandConfig;

pub fn execute(config: &StagehandConfig, json: bool) -> Result<()> {
    let ctx = BoardContext::seeded(chrono::Local::now().date_naive());
    let artist = config.artist.name.as_str();
    let dashboard = Dashboard::build(artist, &ctx.state().schedule);

    if json {
        return print_json(&dashboard);
    }

    println!("Follower growth");
    let growth = create_table(&dashboard.follower_growth, vec!["Month", artist], |point| {
        vec![
            point.label.clone(),
            point.series.get(artist).map(|v| v.to_string()).unwrap_or_default(),
        ]
    });
    println!("{growth}\n");

    print_points("Engagement by platform", "Interactions", &dashboard.engagement_by_platform);
    print_points("Content type distribution", "Share (%)", &dashboard.content_type_distribution);
    print_points("Scheduled content mix", "Posts", &dashboard.content_mix);
    print_points("Scheduled posts per platform", "Posts", &dashboard.platform_load);
    Ok(())
}

fn print_points(title: &str, value_header: &str, points: &[DataPoint]) {
    println!("{title}");
    if points.is_empty() {
        println!("(nothing scheduled)\n");
        return;
    }
    let table = create_table(points, vec!["Label", value_header], |point| {
        vec![point.label.clone(), point.value.to_string()]
    });
    println!("{table}\n");
}
