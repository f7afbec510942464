//! Contracts for the narrative, portrait and narration services.
//!
//! Real providers live outside this crate. The offline implementations here
//! keep the CLI usable without any network access and make the orchestration
//! testable.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Everything the narrative service is told. The winner is already decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryRequest<'a> {
    pub player_name: &'a str,
    pub opponent_name: &'a str,
    pub opponent_title: &'a str,
    pub winner_name: &'a str,
}

impl StoryRequest<'_> {
    fn loser_name(&self) -> &str {
        if self.winner_name == self.player_name {
            self.opponent_name
        } else {
            self.player_name
        }
    }
}

/// Structured story returned by the narrative service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Story {
    pub player_title: String,
    pub opponent_title: String,
    pub player_appearance: String,
    pub opponent_appearance: String,
    pub rounds: Vec<String>,
    pub victory_line: String,
    pub battle_summary: String,
}

/// Writes the fight narrative for a pre-decided winner.
pub trait Narrator {
    fn narrate(&self, request: &StoryRequest<'_>) -> Result<Story>;
}

/// Renders a portrait, returning inline image data. `None` means no image.
pub trait PortraitArtist {
    fn render(&self, name: &str, appearance_hint: &str) -> Result<Option<String>>;
}

/// Reads the story aloud. `None` means no audio.
pub trait Announcer {
    fn announce(
        &self,
        story: &str,
        victory_line: &str,
        winner_name: &str,
    ) -> Result<Option<Vec<u8>>>;
}

/// Deterministic template narrator that always honours the given winner.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptedNarrator;

impl Narrator for ScriptedNarrator {
    fn narrate(&self, request: &StoryRequest<'_>) -> Result<Story> {
        let player = request.player_name;
        let opponent = request.opponent_name;
        let winner = request.winner_name;
        let loser = request.loser_name();

        let opponent_title = if request.opponent_title.is_empty() {
            "Unknown Warrior".to_string()
        } else {
            request.opponent_title.to_string()
        };

        Ok(Story {
            player_title: "Nameless Challenger".to_string(),
            opponent_title,
            player_appearance: format!("fantasy hero named {}", player),
            opponent_appearance: format!("fantasy rival named {}", opponent),
            rounds: vec![
                format!(
                    "{} and {} size each other up as the arena falls silent. The first clash of steel sends sparks across the sand.",
                    player, opponent
                ),
                format!(
                    "{} presses the attack, but {} answers blow for blow. Neither fighter gives an inch.",
                    loser, winner
                ),
                format!(
                    "{} finds an opening and strikes with everything left. {} falls, and the crowd roars.",
                    winner, loser
                ),
            ],
            victory_line: format!("Remember the name {}!", winner),
            battle_summary: format!("{} defeated {} in three rounds.", winner, loser),
        })
    }
}

/// Draws a flat SVG badge with the fighter's initials.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonogramArtist;

const PALETTE: [&str; 6] = ["#8e2c2c", "#2c4f8e", "#2c8e5a", "#7a2c8e", "#8e6d2c", "#2c7f8e"];

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .map(|c| match c {
            '&' | '<' | '>' | '"' | '\'' => '?',
            c => c,
        })
        .collect()
}

impl PortraitArtist for MonogramArtist {
    fn render(&self, name: &str, _appearance_hint: &str) -> Result<Option<String>> {
        let letters = initials(name);
        if letters.is_empty() {
            return Ok(None);
        }
        let index = name.bytes().map(usize::from).sum::<usize>() % PALETTE.len();
        Ok(Some(format!(
            concat!(
                "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"512\" height=\"512\">",
                "<rect width=\"512\" height=\"512\" fill=\"{}\"/>",
                "<text x=\"256\" y=\"300\" font-size=\"180\" text-anchor=\"middle\" fill=\"#ffffff\">{}</text>",
                "</svg>"
            ),
            PALETTE[index], letters
        )))
    }
}

/// Produces no portraits at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPortraits;

impl PortraitArtist for NoPortraits {
    fn render(&self, _name: &str, _appearance_hint: &str) -> Result<Option<String>> {
        Ok(None)
    }
}

/// Produces no audio.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAnnouncer;

impl Announcer for SilentAnnouncer {
    fn announce(
        &self,
        _story: &str,
        _victory_line: &str,
        _winner_name: &str,
    ) -> Result<Option<Vec<u8>>> {
        Ok(None)
    }
}
