//! Subcommand implementations

pub mod analytics;
pub mod board;
pub mod config;
pub mod ideas;
pub mod requests;
pub mod schedule;

use crate::cli::{Cli, Commands};
use anyhow::Result;
use stagehand_config::StagehandConfig;

/// Run the parsed command
pub async fn run(cli: Cli, config: &StagehandConfig) -> Result<()> {
    let json = cli.json;

    match cli.command {
        Commands::Board => board::execute(json),
        Commands::Week { today, days } => {
            let days = days.unwrap_or(config.calendar.window_days);
            schedule::execute_week(today.resolve(), days, json)
        }
        Commands::Move {
            item,
            target,
            today,
        } => board::execute_move(&item, &target, today.resolve(), config, json),
        Commands::Plan {
            title,
            date,
            time,
            content_type,
            platform,
            today,
        } => {
            let form = stagehand_board::post::PostForm::new(title, date, time)
                .with_content_type(content_type)
                .with_platform(platform);
            schedule::execute_plan(form, today.resolve(), config, json)
        }
        Commands::Analytics => analytics::execute(config, json),
        Commands::Requests { status } => requests::execute(status.map(Into::into), json),
        Commands::Ideas {
            topic,
            platform,
            count,
        } => ideas::execute_ideas(topic, platform, count, config, json).await,
        Commands::Pillars { about } => ideas::execute_pillars(&about, config, json).await,
        Commands::Config => config::execute(config, json),
    }
}
