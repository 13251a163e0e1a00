use std::path::Path;

use colored::Colorize;
use tk_reading::ReaderConfig;

pub fn run(data: Option<&Path>, category: &str, card_id: &str, json: bool) -> Result<(), String> {
    let reader = super::open_reader(data, ReaderConfig::default());
    let outcome = reader
        .resolve_slot(card_id, category)
        .map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&outcome).map_err(|e| e.to_string())?;
        println!("{out}");
    }

    if let Some(error) = outcome.error() {
        return Err(error.to_string());
    }
    if json {
        return Ok(());
    }

    let marker = match (outcome.is_fallback(), outcome.default_name()) {
        (true, Some(name)) => format!(" (default: {name})").dimmed().to_string(),
        (true, None) => " (default)".dimmed().to_string(),
        (false, _) => String::new(),
    };
    println!("  {} [{}]{marker}", outcome.name().bold(), outcome.id().dimmed());
    if !outcome.description().is_empty() {
        println!("  {}", outcome.description());
    }
    if let Some(guidance) = outcome.guidance() {
        println!();
        println!("  {}", guidance.dimmed());
    }

    Ok(())
}
