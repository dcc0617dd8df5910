//! The single path through which the inventory is mutated.
//!
//! The store sits behind a `tokio::sync::Mutex`, whose lock is handed out in
//! FIFO order. A command holds it from load through save and the display
//! refresh, so concurrent commands are applied one at a time and the display
//! always ends on the latest state.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error, info, instrument};

use super::audit::AuditLog;
use super::display::DisplaySync;
use super::platform::ChatPlatform;
use crate::commands::inventory::logic::{self, InventoryCommand, Mutation};
use crate::database::models::InventoryDocument;
use crate::database::store::JsonStore;
use crate::error::{BotError, BotResult};

pub struct InventoryService {
    store: Mutex<JsonStore>,
    platform: Arc<dyn ChatPlatform>,
    display: DisplaySync,
    audit: AuditLog,
}

impl InventoryService {
    pub fn new(
        store: JsonStore,
        platform: Arc<dyn ChatPlatform>,
        display: DisplaySync,
        audit: AuditLog,
    ) -> Self {
        Self {
            store: Mutex::new(store),
            platform,
            display,
            audit,
        }
    }

    /// Applies one command on behalf of `user`.
    ///
    /// Errors returned here mean nothing was persisted. Display and audit
    /// failures happen after the save, so they are logged instead of returned.
    #[instrument(level = "debug", skip(self, command), fields(category = ?command.category))]
    pub async fn execute(&self, user: &str, command: &InventoryCommand) -> BotResult<Mutation> {
        let mutation = {
            let store = self.store.lock().await;
            let mut doc = store.load_inventory().await?;
            let mutation = logic::apply(&mut doc, command)?;
            store.save_inventory(&doc).await?;
            info!(
                target: "inventory",
                user,
                item = %mutation.key,
                before = mutation.before,
                after = mutation.after,
                "Inventory updated"
            );
            if let Err(e) = self.display.update(self.platform.as_ref(), &store).await {
                error!(target: "inventory.display", error = %e, "Failed to refresh display message");
            }
            mutation
        };

        if let Err(e) = self
            .audit
            .log_change(self.platform.as_ref(), user, &mutation)
            .await
        {
            error!(target: "inventory.audit", error = %e, "Failed to post audit entry");
        }
        Ok(mutation)
    }

    /// Refreshes the display message without mutating anything. Used at start-up.
    pub async fn refresh_display(&self) -> BotResult<()> {
        let store = self.store.lock().await;
        self.display.update(self.platform.as_ref(), &store).await
    }

    /// Current stored inventory.
    pub async fn snapshot(&self) -> BotResult<InventoryDocument> {
        self.store.lock().await.load_inventory().await
    }

    /// Logs an operational failure and forwards it to the admin channel.
    pub async fn report_failure(&self, user: &str, err: &BotError) {
        error!(target: "inventory", user, error = %err, "Inventory command failed");
        if let Err(e) = self
            .audit
            .report_failure(self.platform.as_ref(), user, err)
            .await
        {
            debug!(target: "inventory.audit", error = %e, "Could not forward failure to admin channel");
        }
    }
}
