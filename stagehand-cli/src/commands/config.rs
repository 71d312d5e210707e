//! `config`

use crate::display::{create_table, print_json};
use anyhow::Result;
use serde_json::Value;
use stagehand_config::StagehandConfig;

pub fn execute(config: &StagehandConfig, json: bool) -> Result<()> {
    let redacted = config.redacted();
    if json {
        return print_json(&redacted);
    }

    let rows = flatten(&serde_json::to_value(&redacted)?);
    let table = create_table(&rows, vec!["Key", "Value"], |(key, value)| {
        vec![key.clone(), value.clone()]
    });
    println!("{table}");
    Ok(())
}

/// `section.key` / display value pairs
fn flatten(value: &Value) -> Vec<(String, String)> {
    let Value::Object(sections) = value else {
        return Vec::new();
    };

    let mut rows = Vec::new();
    for (section, fields) in sections {
        let Value::Object(fields) = fields else {
            continue;
        };
        for (key, field) in fields {
            let shown = match field {
                Value::String(s) => s.clone(),
                Value::Null => "(not set)".to_string(),
                other => other.to_string(),
            };
            rows.push((format!("{section}.{key}"), shown));
        }
    }
    rows
}
