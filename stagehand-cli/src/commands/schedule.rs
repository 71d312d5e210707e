//! `week` and `plan`

use crate::display::{create_table, print_json};
use anyhow::{bail, Result};
use chrono::NaiveDate;
use serde_json::json;
use stagehand_board::calendar::{self, DayBucket};
use stagehand_board::post::{ListWeek, PostForm};
use stagehand_board::{BoardContext, Execute, OperationProcessor, Snapshot};
use stagehand_config::StagehandConfig;
use tracing::debug;

/// Actor recorded on changes made from the command line
const CLI_ACTOR: &str = "cli";

pub fn execute_week(today: NaiveDate, days: u32, json: bool) -> Result<()> {
    let mut ctx = BoardContext::seeded(today);
    let week = ListWeek::new(today).with_days(days).execute(&mut ctx).into_result()?;

    if json {
        return print_json(&week);
    }
    print_week(ctx.state(), today, days);
    Ok(())
}

/// One row per post; empty days get a single placeholder row
pub fn print_week(snapshot: &Snapshot, today: NaiveDate, days: u32) {
    let buckets = calendar::week(snapshot, today, days);
    let rows: Vec<Vec<String>> = buckets.iter().flat_map(day_rows).collect();

    let table = create_table(
        &rows,
        vec!["Day", "Time", "Item", "Post", "Type", "Platform", "Status"],
        Clone::clone,
    );
    println!("{table}");
}

fn day_rows(day: &DayBucket<'_>) -> Vec<Vec<String>> {
    let mut label = day.date.format("%a %d %b").to_string();
    if day.is_today {
        label.push_str(" (today)");
    }

    if day.posts.is_empty() {
        let mut row = vec![String::new(); 7];
        row[0] = label;
        row[3] = "-".into();
        return vec![row];
    }

    day.posts
        .iter()
        .enumerate()
        .map(|(i, post)| {
            vec![
                if i == 0 { label.clone() } else { String::new() },
                post.scheduled_at.format("%H:%M").to_string(),
                format!("post:{}", post.id),
                post.title.clone(),
                post.content_type.label().to_string(),
                post.platform.label().to_string(),
                post.status.label().to_string(),
            ]
        })
        .collect()
}

pub fn execute_plan(
    form: PostForm,
    today: NaiveDate,
    config: &StagehandConfig,
    json: bool,
) -> Result<()> {
    let add = match form.into_add() {
        Ok(add) => add,
        Err(error) if error.is_validation() => bail!("the post form was rejected: {error}"),
        Err(error) => return Err(error.into()),
    };

    let mut ctx = BoardContext::seeded(today);
    let post = OperationProcessor::with_actor(CLI_ACTOR).process(&add, &mut ctx)?;
    debug!(entries = ctx.activity().len(), "post scheduled");

    if json {
        return print_json(&json!({ "post": post, "activity": ctx.activity() }));
    }

    println!(
        "Scheduled post:{} \"{}\" for {}",
        post["id"],
        add.title.trim(),
        add.scheduled_at.format("%Y-%m-%d %H:%M")
    );
    println!();
    print_week(ctx.state(), today, config.calendar.window_days);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use stagehand_board::defaults::demo_snapshot;

    #[test]
    fn test_day_rows() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        let snapshot = demo_snapshot(today);
        let buckets = calendar::week(&snapshot, today, 3);

        let empty = day_rows(&buckets[0]);
        assert_eq!(empty.len(), 1);
        assert_eq!(empty[0][0], "Mon 08 Jan (today)");
        assert_eq!(empty[0][3], "-");

        let busy = day_rows(&buckets[1]);
        let evening = NaiveTime::from_hms_opt(18, 0, 0).unwrap();
        assert_eq!(busy[0][1], evening.format("%H:%M").to_string());
        assert_eq!(busy[0][2], "post:1");
    }
}
