use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use tk_reading::ReaderConfig;

pub fn run(data: Option<&Path>) -> Result<(), String> {
    let reader = super::open_reader(data, ReaderConfig::default());
    let deck = reader.deck().map_err(|e| e.to_string())?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Suit", "Rank"]);

    for card in deck.cards() {
        table.add_row(vec![
            card.id.clone(),
            card.name.clone(),
            card.suit.to_string(),
            card.rank.clone(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} cards", deck.len());

    Ok(())
}
