//! Text rendering for the display message, replies and audit entries.

use std::collections::BTreeMap;

use super::logic::Mutation;
use crate::constants::{AMMO_HEADING, ARMOR_HEADING, GUNS_HEADING};
use crate::database::models::InventoryDocument;

/// Renders the full display body: guns, armor, ammo, separated by blank lines.
pub fn render(doc: &InventoryDocument) -> String {
    [
        render_section(GUNS_HEADING, &doc.guns),
        format!("{}\n{}", ARMOR_HEADING, doc.armor),
        render_section(AMMO_HEADING, &doc.ammo),
    ]
    .join("\n\n")
}

fn render_section(heading: &str, items: &BTreeMap<String, u64>) -> String {
    if items.is_empty() {
        return format!("{}\nNone", heading);
    }
    let lines = items
        .iter()
        .map(|(name, count)| format!("• {} → {}", display_name(name), count))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{}\n{}", heading, lines)
}

/// `AK47` -> `Ak47`, `9mm` -> `9mm`.
pub fn display_name(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

pub fn success_reply(mutation: &Mutation) -> String {
    format!(
        "✅ {} {} {}",
        mutation.direction.past_tense(),
        mutation.amount,
        mutation.key
    )
}

pub fn audit_entry(user: &str, mutation: &Mutation, timestamp: &str) -> String {
    format!(
        "📢 **Inventory Update**\n\
         **Type:** {}\n\
         **Item:** {}\n\
         **Before:** {}\n\
         **After:** {}\n\
         **Amount:** {}\n\
         **By:** {}\n\
         **Time:** {}",
        mutation.category.label(),
        display_name(&mutation.key),
        mutation.before,
        mutation.after,
        mutation.amount,
        user,
        timestamp
    )
}

pub fn failure_notice(user: &str, error: &impl std::fmt::Display) -> String {
    format!("⚠️ **Inventory command failed**\n**By:** {}\n**Error:** {}", user, error)
}
