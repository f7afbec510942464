//! File locations and soft-fail file reading.

use crate::{CATALOG_ENV_VAR, DATABASE_ENV_VAR};
use std::{
    fs,
    io::Read,
    path::{Path, PathBuf},
};

/// Catalog shipped alongside the binary, relative to the working directory.
pub const DEFAULT_CATALOG_PATH: &str = "data/predefined_opponents.json";

/// Path: `--catalog`, else `$NAME_BATTLE_CATALOG`, else `data/predefined_opponents.json`
pub fn catalog_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| std::env::var_os(CATALOG_ENV_VAR).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH))
}

/// Path: `--db`, else `$NAME_BATTLE_DB`, else `~/.local/share/name-battle/characters.db`
pub fn database_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| std::env::var_os(DATABASE_ENV_VAR).map(PathBuf::from))
        .unwrap_or_else(|| {
            let base = dirs::data_dir().unwrap_or_else(|| {
                let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
                home.push(".local");
                home.push("share");
                home
            });
            base.join("name-battle").join("characters.db")
        })
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}
