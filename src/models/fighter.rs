//! Fighters and their portrait references.

use crate::cli::types::{Source, StatBlock};
use serde::{Deserialize, Serialize};

/// Where a fighter's picture comes from.
///
/// At most one reference is authoritative. The priority is a local asset
/// file, then an external URL, then inline encoded data. Empty strings count
/// as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Portrait {
    pub image_file: String,
    pub image_url: String,
    pub image_data: String,
}

/// The live portrait reference after applying the priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortraitRef<'a> {
    File(&'a str),
    Url(&'a str),
    Inline(&'a str),
}

impl Portrait {
    pub fn inline(data: impl Into<String>) -> Self {
        Self {
            image_data: data.into(),
            ..Self::default()
        }
    }

    pub fn live(&self) -> Option<PortraitRef<'_>> {
        if !self.image_file.is_empty() {
            Some(PortraitRef::File(&self.image_file))
        } else if !self.image_url.is_empty() {
            Some(PortraitRef::Url(&self.image_url))
        } else if !self.image_data.is_empty() {
            Some(PortraitRef::Inline(&self.image_data))
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.live().is_none()
    }
}

/// A participant in a battle: either an opponent candidate or the human player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fighter {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub portrait: Portrait,
    #[serde(default)]
    pub stats: StatBlock,
    pub source: Source,
    /// Original player's name; only set for `user_character` opponents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_name: Option<String>,
    /// Free-text hint for downstream portrait rendering.
    #[serde(default)]
    pub appearance_hint: String,
}

impl Fighter {
    pub fn new(name: impl Into<String>, source: Source) -> Self {
        Self {
            name: name.into(),
            title: String::new(),
            description: String::new(),
            portrait: Portrait::default(),
            stats: StatBlock::default(),
            source,
            creator_name: None,
            appearance_hint: String::new(),
        }
    }

    /// Display name with title, e.g. `Iron Duke (Warden of the Gate)`.
    pub fn label(&self) -> String {
        if self.title.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.title)
        }
    }
}
