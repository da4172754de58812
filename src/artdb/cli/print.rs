use artdb::api::{CmdMessage, MessageLevel};
use artdb::config::{ArtdbConfig, KEYS};
use artdb::index::DisplayRecord;
use artdb::model::Field;
use chrono::{DateTime, Utc};
use colored::Colorize;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const DEFAULT_LINE_WIDTH: usize = 100;
const MIN_LINE_WIDTH: usize = 60;
const INDEX_WIDTH: usize = 5;
const YEAR_WIDTH: usize = 10;
const UDC_WIDTH: usize = 10;
const TIME_WIDTH: usize = 14;
const GAP: &str = "  ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_records(records: &[DisplayRecord], empty_message: &str) {
    if records.is_empty() {
        println!("{}", empty_message.dimmed());
        return;
    }

    let now = Utc::now();
    for dr in records {
        let line = RecordLine::new(dr, line_width(), now);
        println!(
            "{}{}{}{}{}{}{}{}{}{}{}",
            line.index.yellow(),
            GAP,
            line.author,
            GAP,
            line.title.bold(),
            GAP,
            line.year,
            GAP,
            line.udc.cyan(),
            GAP,
            line.added.dimmed()
        );
    }
}

pub(super) fn print_full_records(records: &[DisplayRecord]) {
    let label_width = Field::ALL
        .iter()
        .map(|f| f.label().width())
        .max()
        .unwrap_or(0);

    for (i, dr) in records.iter().enumerate() {
        if i > 0 {
            println!("\n--------------------------------\n");
        }
        println!(
            "{} {}",
            format!("{}.", dr.index).yellow(),
            dr.entry.id().simple().to_string().dimmed()
        );
        for field in Field::ALL {
            let label = format!("{}:", field.label());
            println!(
                "  {:<width$} {}",
                label.bold(),
                dr.entry.record.get(field),
                width = label_width + 1
            );
        }
        println!(
            "  {}",
            format!(
                "added {}, updated {}",
                dr.entry.metadata.created_at.format("%Y-%m-%d %H:%M"),
                dr.entry.metadata.updated_at.format("%Y-%m-%d %H:%M")
            )
            .dimmed()
        );
    }
}

pub(super) fn print_config(config: &ArtdbConfig) {
    for key in KEYS {
        let value = config.get(key).unwrap_or_default();
        println!("{} = {}", key.bold(), value);
    }
}

/// One listing row, every column already padded or truncated to its width.
#[derive(Debug)]
struct RecordLine {
    index: String,
    author: String,
    title: String,
    year: String,
    udc: String,
    added: String,
}

impl RecordLine {
    fn new(dr: &DisplayRecord, width: usize, now: DateTime<Utc>) -> Self {
        let record = &dr.entry.record;
        let fixed = INDEX_WIDTH + YEAR_WIDTH + UDC_WIDTH + TIME_WIDTH + GAP.width() * 5;
        let flexible = width.max(MIN_LINE_WIDTH).saturating_sub(fixed);
        let author_width = flexible / 3;
        let title_width = flexible - author_width;

        Self {
            index: format!("{:>w$}", format!("{}.", dr.index), w = INDEX_WIDTH),
            author: fit(record.author(), author_width),
            title: fit(record.title(), title_width),
            year: fit(record.year(), YEAR_WIDTH),
            udc: fit(record.classification_code(), UDC_WIDTH),
            added: format!(
                "{:>w$}",
                format_time_ago(dr.entry.metadata.created_at, now),
                w = TIME_WIDTH
            ),
        }
    }

    #[cfg(test)]
    fn plain(&self) -> String {
        [
            self.index.as_str(),
            &self.author,
            &self.title,
            &self.year,
            &self.udc,
            &self.added,
        ]
        .join(GAP)
    }
}

fn line_width() -> usize {
    console::Term::stdout()
        .size_checked()
        .map(|(_, cols)| cols as usize)
        .unwrap_or(DEFAULT_LINE_WIDTH)
}

/// Truncates to `width` columns (marking the cut with `…`), then pads to it.
fn fit(s: &str, width: usize) -> String {
    let text = truncate_to_width(s, width);
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    if max_width > 0 {
        result.push('…');
    }
    result
}

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}
