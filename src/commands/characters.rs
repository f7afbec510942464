//! Promoted characters command implementation

use std::path::PathBuf;

use crate::Result;

use super::common::open_store;

/// Handle the characters command
pub fn handle_characters(db: Option<PathBuf>, as_json: bool) -> Result<()> {
    let store = open_store(db)?;
    let characters = store.characters()?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&characters)?); // tarpaulin::skip
        return Ok(());
    }

    if characters.is_empty() {
        println!("No player characters yet. Win a fight to join the arena.");
        return Ok(());
    }

    for character in &characters {
        println!("{} - {}", character.name, character.title);
        if !character.summary.is_empty() {
            println!("  {}", character.summary);
        }
        println!("  {}", character.stats);
    }
    println!("\n{} player characters", characters.len());

    Ok(())
}
