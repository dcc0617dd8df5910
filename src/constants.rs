// Central defaults. Every value here can be overridden from the environment (see `config`).
pub const DEFAULT_ADMIN_CHANNEL_ID: u64 = 1397949485669159172;
pub const DEFAULT_DISPLAY_CHANNEL_ID: u64 = 1397385606723539126;
pub const DEFAULT_PREFIX: char = '~';
pub const DEFAULT_INVENTORY_FILE: &str = "./data.json";
pub const DEFAULT_DISPLAY_MESSAGE_FILE: &str = "./displayMessageId.json";

/// Body of a freshly created display message, replaced on the first refresh.
pub const DISPLAY_PLACEHOLDER: &str = "Initializing inventory...";

pub const GUNS_HEADING: &str = "**🔫 Guns**";
pub const ARMOR_HEADING: &str = "**🛡️ Armor**";
pub const AMMO_HEADING: &str = "**💥 Ammo**";
