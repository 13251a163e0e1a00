use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use tk_reading::{Category, ReaderConfig, TomeDescription};

pub fn run(
    data: Option<&Path>,
    seed: Option<u64>,
    json: bool,
    tome_description: TomeDescription,
) -> Result<(), String> {
    let config = ReaderConfig::default().with_tome_description(tome_description);
    let reader = super::open_reader(data, config);
    let reading = reader
        .perform_full_reading(seed)
        .map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&reading).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    println!("  {} (seed {})", "Tarokka Reading".bold(), reading.seed);
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Slot", "Card", "Outcome", "Description"]);

    for category in Category::ALL {
        let card = reading.cards.card(category);
        let outcome = reading.cards.outcome(category);
        let name = match (outcome.is_fallback(), outcome.default_name()) {
            (true, Some(default)) => format!("{} (default: {default})", outcome.name()),
            (true, None) => format!("{} (default)", outcome.name()),
            (false, _) => outcome.name().to_string(),
        };
        table.add_row(vec![
            category.to_string(),
            card.name.clone(),
            name,
            super::truncate(outcome.description(), 60),
        ]);
    }

    println!("{table}");

    let notes: Vec<(Category, String)> = Category::ALL
        .into_iter()
        .filter_map(|c| {
            reading
                .cards
                .outcome(c)
                .guidance()
                .map(|g| (c, g.to_string()))
        })
        .collect();
    if !notes.is_empty() {
        println!();
        for (category, note) in notes {
            println!("  {}: {}", category.to_string().dimmed(), note.dimmed());
        }
    }

    println!();
    println!("  Replay with: tarokka read --seed {}", reading.seed);

    Ok(())
}
