//! `requests`

use crate::display::{create_table, print_json};
use anyhow::Result;
use stagehand_board::request::ListFanRequests;
use stagehand_board::{BoardContext, Execute, FanRequest, RequestStatus};

pub fn execute(status: Option<RequestStatus>, json: bool) -> Result<()> {
    let mut ctx = BoardContext::seeded(chrono::Local::now().date_naive());
    let command = match status {
        Some(status) => ListFanRequests::new().with_status(status),
        None => ListFanRequests::new(),
    };
    let listed = command.execute(&mut ctx).into_result()?;

    if json {
        return print_json(&listed);
    }

    let requests: Vec<FanRequest> = serde_json::from_value(listed["requests"].clone())?;
    if requests.is_empty() {
        println!("No fan requests");
        return Ok(());
    }

    let table = create_table(
        &requests,
        vec!["Date", "Fan", "Request", "Platform", "Status"],
        |request| {
            vec![
                request.date.to_string(),
                request.fan_name.clone(),
                request.request.clone(),
                request.platform.label().to_string(),
                request.status.label().to_string(),
            ]
        },
    );
    println!("{table}");
    Ok(())
}
