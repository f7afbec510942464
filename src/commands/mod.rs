//! Command implementations for the Name Battle CLI

pub mod catalog;
pub mod characters;
pub mod common;
pub mod fight;
pub mod history;
pub mod matching;
pub mod tiers;
