//! Parsing and applying the add/take commands. Pure functions only; the
//! service layer decides when the document is loaded and saved.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::database::models::{Category, Direction, InventoryDocument};
use crate::error::{BotError, BotResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    AddGuns,
    TakeGuns,
    AddArmor,
    TakeArmor,
    AddAmmo,
    TakeAmmo,
}

impl FromStr for CommandKind {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "add-guns" | "iaddguns" => Ok(CommandKind::AddGuns),
            "take-guns" | "itakeguns" => Ok(CommandKind::TakeGuns),
            "add-armor" | "iaddarmor" => Ok(CommandKind::AddArmor),
            "take-armor" | "itakearmor" => Ok(CommandKind::TakeArmor),
            "add-ammo" | "iaddammo" => Ok(CommandKind::AddAmmo),
            "take-ammo" | "itakeammo" => Ok(CommandKind::TakeAmmo),
            _ => Err(()),
        }
    }
}

impl CommandKind {
    pub fn category(self) -> Category {
        match self {
            CommandKind::AddGuns | CommandKind::TakeGuns => Category::Guns,
            CommandKind::AddArmor | CommandKind::TakeArmor => Category::Armor,
            CommandKind::AddAmmo | CommandKind::TakeAmmo => Category::Ammo,
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            CommandKind::AddGuns | CommandKind::AddArmor | CommandKind::AddAmmo => Direction::Add,
            _ => Direction::Take,
        }
    }
}

/// A recognised command whose amount has been parsed but whose name is not yet resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryCommand {
    pub category: Category,
    pub direction: Direction,
    pub amount: u64,
    /// Lookup key as typed by the user. `None` for armor.
    pub name: Option<String>,
}

/// Outcome of a successful mutation, carrying the resolved (stored-case) key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    pub category: Category,
    pub key: String,
    pub before: u64,
    pub after: u64,
    pub amount: u64,
    pub direction: Direction,
}

/// Returns the command body when `content` starts with `prefix`.
pub fn strip_prefix(content: &str, prefix: char) -> Option<&str> {
    content.strip_prefix(prefix)
}

/// Parses a prefix-stripped command body.
///
/// `None` means the first token is not an inventory command and the message
/// should be ignored without a reply.
pub fn parse_command(body: &str) -> Option<BotResult<InventoryCommand>> {
    let mut tokens = body.split_whitespace();
    let kind = CommandKind::from_str(tokens.next()?).ok()?;
    let amount = match parse_amount(tokens.next()) {
        Ok(amount) => amount,
        Err(e) => return Some(Err(e)),
    };
    let name = match kind.category() {
        Category::Guns => Some(tokens.collect::<Vec<_>>().join(" ")),
        Category::Ammo => Some(tokens.next().unwrap_or_default().to_string()),
        Category::Armor => None,
    };
    Some(Ok(InventoryCommand {
        category: kind.category(),
        direction: kind.direction(),
        amount,
        name,
    }))
}

fn parse_amount(token: Option<&str>) -> BotResult<u64> {
    let token = token.unwrap_or_default();
    token
        .parse::<u64>()
        .map_err(|_| BotError::InvalidAmount(token.to_string()))
}

/// Finds the stored key equal to `input` ignoring case. Keys are scanned in
/// ordinal order, so the first of several case-variants wins.
pub fn find_matching_key<'a>(map: &'a BTreeMap<String, u64>, input: &str) -> Option<&'a str> {
    let wanted = input.to_lowercase();
    map.keys()
        .find(|k| k.to_lowercase() == wanted)
        .map(String::as_str)
}

/// Applies `command` to `doc` in place. On error `doc` is left untouched.
pub fn apply(doc: &mut InventoryDocument, command: &InventoryCommand) -> BotResult<Mutation> {
    let InventoryCommand {
        category,
        direction,
        amount,
        ref name,
    } = *command;

    let (key, slot) = match category {
        Category::Armor => ("armor".to_string(), &mut doc.armor),
        Category::Guns | Category::Ammo => {
            let map = if category == Category::Guns {
                &mut doc.guns
            } else {
                &mut doc.ammo
            };
            let input = name.as_deref().unwrap_or_default();
            let key = find_matching_key(map, input)
                .map(str::to_string)
                .ok_or_else(|| BotError::not_found(category, input))?;
            let slot = map
                .get_mut(&key)
                .ok_or_else(|| BotError::not_found(category, input))?;
            (key, slot)
        }
    };

    let before = *slot;
    let after = direction.apply(before, amount);
    *slot = after;

    Ok(Mutation {
        category,
        key,
        before,
        after,
        amount,
        direction,
    })
}
