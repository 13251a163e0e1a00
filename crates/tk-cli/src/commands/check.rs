use std::path::Path;

use colored::Colorize;
use tk_reading::ReaderConfig;

pub fn run(data: Option<&Path>) -> Result<(), String> {
    let reader = super::open_reader(data, ReaderConfig::default());
    let deck = reader.deck().map_err(|e| e.to_string())?;
    let config = reader.reading_config().map_err(|e| e.to_string())?;

    let unknown: Vec<_> = config
        .referenced_cards()
        .into_iter()
        .filter(|(_, card_id)| !deck.contains(card_id))
        .collect();
    for (category, card_id) in &unknown {
        eprintln!(
            "  {} {} table references unknown card \"{}\" (it will never be drawn)",
            "warning:".yellow(),
            category.key(),
            card_id
        );
    }

    println!("  All checks passed.");
    println!(
        "  {} cards, {} table entries",
        deck.len(),
        config.entry_count()
    );
    if !unknown.is_empty() {
        println!("  {} warnings", unknown.len());
    }

    Ok(())
}
