//! `board` and `move`

use super::schedule::print_week;
use crate::display::{create_table, print_json};
use anyhow::{bail, Result};
use chrono::NaiveDate;
use serde_json::{json, Value};
use stagehand_board::column::GetColumn;
use stagehand_board::item::ListBucket;
use stagehand_board::{BoardContext, Bucket, DragSession, DropOutcome, Execute, Snapshot, Task};
use stagehand_config::StagehandConfig;

pub fn execute(json: bool) -> Result<()> {
    let mut ctx = BoardContext::seeded(chrono::Local::now().date_naive());

    if json {
        let ids: Vec<_> = ctx.state().board.columns.iter().map(|c| c.id.clone()).collect();
        let columns = ids
            .into_iter()
            .map(|id| GetColumn::new(id).execute(&mut ctx).into_result())
            .collect::<Result<Vec<Value>, _>>()?;
        return print_json(&columns);
    }

    print_board(ctx.state());
    Ok(())
}

/// Columns in order, one row per task
pub fn print_board(snapshot: &Snapshot) {
    let rows: Vec<(&str, &Task)> = snapshot
        .board
        .columns
        .iter()
        .flat_map(|column| {
            column
                .task_ids
                .iter()
                .filter_map(|id| snapshot.board.task(id))
                .map(move |task| (column.title.as_str(), task))
        })
        .collect();

    if rows.is_empty() {
        println!("The board is empty");
        return;
    }

    let table = create_table(&rows, vec!["Column", "Item", "Task"], |(column, task)| {
        vec![column.to_string(), format!("task:{}", task.id), task.content.clone()]
    });
    println!("{table}");
}

/// `column:<id>`, `day:<date>`, a bare date, or a bare column id
pub fn parse_target(target: &str) -> Result<Bucket> {
    let target = target.trim();
    if let Some(id) = target.strip_prefix("column:") {
        return Ok(Bucket::column(id));
    }
    if let Some(day) = target.strip_prefix("day:") {
        return match NaiveDate::parse_from_str(day, "%Y-%m-%d") {
            Ok(date) => Ok(Bucket::day(date)),
            Err(_) => bail!("invalid day '{day}', expected YYYY-MM-DD"),
        };
    }
    if target.is_empty() {
        bail!("no target given");
    }
    Ok(match NaiveDate::parse_from_str(target, "%Y-%m-%d") {
        Ok(date) => Bucket::day(date),
        Err(_) => Bucket::column(target),
    })
}

pub fn execute_move(
    item: &str,
    target: &str,
    today: NaiveDate,
    config: &StagehandConfig,
    json: bool,
) -> Result<()> {
    let mut ctx = BoardContext::seeded(today);
    let target = parse_target(target)?;

    let mut session = DragSession::new();
    if !session.start_from_payload(ctx.state(), item) {
        bail!("nothing to drag at '{item}'");
    }
    let outcome = session.drop_on(&mut ctx, Some(&target));

    if json {
        let listing = ListBucket::new(target.clone()).execute(&mut ctx).into_result()?;
        let outcome = match outcome {
            DropOutcome::Moved { version } => json!({ "moved": true, "version": version }),
            DropOutcome::Unchanged(reason) => json!({ "moved": false, "reason": reason }),
            DropOutcome::NoTarget | DropOutcome::NotDragging => json!({ "moved": false }),
        };
        return print_json(&json!({ "outcome": outcome, "bucket": listing }));
    }

    match outcome {
        DropOutcome::Moved { .. } => println!("Moved {item} to {target}"),
        DropOutcome::Unchanged(reason) => println!("{item} stays where it was: {reason}"),
        DropOutcome::NoTarget | DropOutcome::NotDragging => println!("Nothing moved"),
    }
    println!();

    match target {
        Bucket::Column(_) => print_board(ctx.state()),
        Bucket::Day(_) => print_week(ctx.state(), today, config.calendar.window_days),
    }
    Ok(())
}
