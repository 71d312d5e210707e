//! Table and JSON output helpers

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

/// Build a table with `headers` and one row per item
pub fn create_table<T, F>(items: &[T], headers: Vec<&str>, row_mapper: F) -> Table
where
    F: Fn(&T) -> Vec<String>,
{
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers);

    for item in items {
        table.add_row(row_mapper(item));
    }

    table
}

/// Pretty-print `value` as JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
