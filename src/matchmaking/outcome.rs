//! Outcome determination.
//!
//! The winner is one weighted coin flip made before any narrative exists.
//! Stats are flavor only and do not shift the probability.

use crate::cli::types::{Side, WinProbability};
use log::debug;
use rand::Rng;

/// Map a roll in [0, 1) to the winning side.
pub fn side_for_roll(roll: f64, win_probability: WinProbability) -> Side {
    if roll < win_probability.as_f64() {
        Side::Player
    } else {
        Side::Opponent
    }
}

pub fn decide_side<R: Rng + ?Sized>(win_probability: WinProbability, rng: &mut R) -> Side {
    let roll: f64 = rng.gen();
    let side = side_for_roll(roll, win_probability);
    debug!(
        "Outcome roll {:.4} against {} -> {} wins",
        roll, win_probability, side
    );
    side
}

/// Decide the fight and return the winning name.
pub fn decide<'a, R: Rng + ?Sized>(
    player_name: &'a str,
    opponent_name: &'a str,
    win_probability: WinProbability,
    rng: &mut R,
) -> &'a str {
    match decide_side(win_probability, rng) {
        Side::Player => player_name,
        Side::Opponent => opponent_name,
    }
}
