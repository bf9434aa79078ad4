use colored::{ColoredString, Colorize};
use eventdeck::api::{CmdMessage, MessageLevel, RecordView};
use eventdeck::config::DeckConfig;
use eventdeck::error::Result;
use eventdeck::model::CollectionKind;
use serde_json::Value;
use std::path::PathBuf;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const LABEL_WIDTH: usize = 24;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", styled(message));
    }
}

/// Messages go to stderr when stdout carries machine-readable output.
pub(crate) fn eprint_messages(messages: &[CmdMessage]) {
    for message in messages {
        eprintln!("{}", styled(message));
    }
}

fn styled(message: &CmdMessage) -> ColoredString {
    match message.level {
        MessageLevel::Info => message.content.dimmed(),
        MessageLevel::Success => message.content.green(),
        MessageLevel::Warning => message.content.yellow(),
    }
}

pub(crate) fn print_json(records: &[RecordView]) -> Result<()> {
    let values: Vec<&Value> = records.iter().map(|r| &r.value).collect();
    println!("{}", serde_json::to_string_pretty(&values)?);
    Ok(())
}

/// One line per record: id, label, then the remaining fields as `key=value`.
pub(crate) fn print_records(records: &[RecordView], kind: Option<CollectionKind>) {
    if records.is_empty() {
        match kind {
            Some(kind) => println!("No {} found.", kind),
            None => println!("No records found."),
        }
        return;
    }

    let id_width = records.iter().map(|r| r.id.width()).max().unwrap_or(0);
    for record in records {
        let label = truncate_to_width(&record.label, LABEL_WIDTH);
        let label_pad = LABEL_WIDTH.saturating_sub(label.width());

        let fixed = 2 + id_width + 2 + LABEL_WIDTH + 2;
        let summary = truncate_to_width(&summarize(record), LINE_WIDTH.saturating_sub(fixed));

        let id_pad = id_width.saturating_sub(record.id.width());

        println!(
            "  {}{}  {}{}  {}",
            record.id.yellow(),
            " ".repeat(id_pad),
            label.bold(),
            " ".repeat(label_pad),
            summary.dimmed()
        );
    }
}

/// Full view of each record, pretty-printed.
pub(crate) fn print_full_records(records: &[RecordView]) -> Result<()> {
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            println!("\n--------------------------------\n");
        }
        println!("{} {}", record.id.yellow(), record.label.bold());
        println!("{}", serde_json::to_string_pretty(&record.value)?);
    }
    Ok(())
}

pub(crate) fn print_paths(paths: &[PathBuf]) {
    for path in paths {
        println!("{}", path.display());
    }
}

pub(crate) fn print_config(config: &DeckConfig) {
    for key in DeckConfig::KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn summarize(record: &RecordView) -> String {
    let Value::Object(fields) = &record.value else {
        return String::new();
    };
    fields
        .iter()
        .filter(|(key, value)| {
            key.as_str() != "id"
                && !value.is_null()
                && value.as_str() != Some(record.label.as_str())
        })
        .map(|(key, value)| match value {
            Value::String(s) => format!("{}={}", key, s.replace('\n', " ")),
            other => format!("{}={}", key, other),
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
