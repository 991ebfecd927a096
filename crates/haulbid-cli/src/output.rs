//! Output formatting module

use haulbid_app::app::Quote;
use haulbid_domain::model::Section;
use haulbid_types::{OutputFormat, Result};

pub fn output_quote(output_format: OutputFormat, quote: &Quote) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&quote.metrics)?;
        println!("{}", content);
        return Ok(());
    }

    // Table format
    let summary = &quote.summary;
    println!("\n{}", summary.title);
    println!("{}", "=".repeat(summary.title.chars().count()));
    if let Some(date) = summary.prepared_on {
        println!("Date: {}", date.format("%Y-%m-%d"));
    }

    let width = summary
        .lines
        .iter()
        .map(|line| line.label.chars().count())
        .max()
        .unwrap_or(0)
        + 1;

    for section in [Section::Client, Section::Job, Section::Profit] {
        let mut lines = summary.section(section).peekable();
        if lines.peek().is_none() {
            continue;
        }

        println!("\n--- {} ---", section.heading());
        for line in lines {
            let label = format!("{}:", line.label);
            println!("{:<width$} {}", label, line.value, width = width);
        }
    }
    println!();

    Ok(())
}
