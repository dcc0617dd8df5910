//! Contains the persisted documents and the small enums shared by every layer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The whole shared inventory. Rewritten in full on every mutation.
///
/// Maps are ordered by the raw stored key, which is also the display order.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryDocument {
    #[serde(default)]
    pub guns: BTreeMap<String, u64>,
    #[serde(default)]
    pub armor: u64,
    #[serde(default)]
    pub ammo: BTreeMap<String, u64>,
}

/// Id of the persistent display message, `null` until one has been created.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayPointer {
    pub id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Guns,
    Armor,
    Ammo,
}

impl Category {
    /// Singular label used in audit entries and error messages.
    pub fn label(self) -> &'static str {
        match self {
            Category::Guns => "Gun",
            Category::Armor => "Armor",
            Category::Ammo => "Ammo",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Add,
    Take,
}

impl Direction {
    /// Apply `amount` to `before`: unclamped (saturating) for adds, clamped at zero for takes.
    pub fn apply(self, before: u64, amount: u64) -> u64 {
        match self {
            Direction::Add => before.saturating_add(amount),
            Direction::Take => before.saturating_sub(amount),
        }
    }

    pub fn past_tense(self) -> &'static str {
        match self {
            Direction::Add => "Added",
            Direction::Take => "Removed",
        }
    }
}
