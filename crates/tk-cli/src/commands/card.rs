use std::path::Path;

use colored::Colorize;
use tk_reading::ReaderConfig;

pub fn run(data: Option<&Path>, id: &str, json: bool) -> Result<(), String> {
    let reader = super::open_reader(data, ReaderConfig::default());
    let card = reader.get_card_by_id(id).map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&card).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let rank = if card.rank.is_empty() {
        card.suit.to_string()
    } else {
        format!("{}, {}", card.suit, card.rank)
    };
    println!("  {} [{}]", card.name.bold(), rank.dimmed());
    println!();

    if !card.description.is_empty() {
        println!("  {}", card.description);
        println!();
    }

    let ft = &card.fortune_telling;
    for (label, text) in [
        ("general:", &ft.general),
        ("light:", &ft.light),
        ("dark:", &ft.dark),
        ("advice:", &ft.advice),
    ] {
        if !text.is_empty() {
            println!("  {label:<9}{text}");
        }
    }

    Ok(())
}
