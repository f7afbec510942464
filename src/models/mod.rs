//! Domain models shared by matchmaking, battles and storage.

pub mod fighter;

pub use fighter::{Fighter, Portrait, PortraitRef};
