//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use dealscope_analytics::rounding::{fixed, round_half_up};
use dealscope_core::types::Grade;

use crate::cli::OutputFormat;

/// Formats and prints rows based on the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
        OutputFormat::Minimal => print_minimal(data),
    }
}

/// Prints any serializable value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{table}");
    Ok(())
}

/// Prints data as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints minimal output (first row only).
fn print_minimal<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    if let Some(first) = data.first() {
        println!("{}", serde_json::to_string(first)?);
    }
    Ok(())
}

/// Formats a percentage with one decimal, e.g. `4.1%`.
pub fn format_percent(value: f64) -> String {
    format!("{}%", fixed(value, 1))
}

/// Formats whole dollars with a leading sign, e.g. `-$618`.
pub fn format_currency(value: f64) -> String {
    let rounded = round_half_up(value);
    if rounded < 0.0 {
        format!("-${}", group_thousands(-rounded))
    } else {
        format!("${}", group_thousands(rounded))
    }
}

fn group_thousands(whole: f64) -> String {
    let digits = format!("{whole:.0}");
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Colors a grade letter by quality.
pub fn colored_grade(grade: Grade) -> String {
    let letter = grade.as_str();
    match grade {
        Grade::A => letter.green().bold().to_string(),
        Grade::B => letter.green().to_string(),
        Grade::C => letter.yellow().to_string(),
        Grade::D => letter.red().to_string(),
        Grade::F => letter.red().bold().to_string(),
    }
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Prints an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// Prints a titled bullet list; nothing if empty.
pub fn print_bullets(title: &str, items: &[String], marker: &str) {
    if items.is_empty() {
        return;
    }
    println!("\n{}", title.bold());
    for item in items {
        println!("  {marker} {item}");
    }
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a key-value pair formatted as a percentage.
    pub fn from_percent(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, format_percent(value))
    }

    /// Creates a key-value pair formatted as whole dollars.
    pub fn from_currency(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, format_currency(value))
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(-617.55), "-$618");
        assert_eq!(format_currency(415.72), "$416");
        assert_eq!(format_currency(450_000.0), "$450,000");
        assert_eq!(format_currency(1_234_567.4), "$1,234,567");
        assert_eq!(format_currency(0.2), "$0");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(4.106666), "4.1%");
        assert_eq!(format_percent(8.25), "8.3%");
    }
}
