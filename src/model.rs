//! Shared state stored in Serenity's global `TypeMap`.

use crate::services::inventory::InventoryService;
use serenity::prelude::TypeMapKey;
use std::sync::Arc;

/// The central, shared state of the application.
/// An `Arc<AppState>` is inserted into the client's data map once at start-up.
pub struct AppState {
    /// Serialized mutation path plus display and audit wiring.
    pub inventory: Arc<InventoryService>,
    /// Single-character command prefix.
    pub prefix: char,
}

impl AppState {
    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
