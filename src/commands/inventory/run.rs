//! Handles the prefix entry point for every inventory command.

use serenity::model::channel::Message;
use serenity::prelude::*;
use tracing::debug;

use super::logic::InventoryCommand;
use super::ui;
use crate::AppState;
use crate::error::BotResult;

/// `parsed` is the interpreter's output for a recognised command; amount errors
/// are answered here before any state is touched.
pub async fn run_prefix(ctx: &Context, msg: &Message, parsed: BotResult<InventoryCommand>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let user = msg.author.name.as_str();

    let result = match parsed {
        Ok(command) => app_state.inventory.execute(user, &command).await,
        Err(e) => Err(e),
    };
    let reply = match result {
        Ok(mutation) => ui::success_reply(&mutation),
        Err(e) if e.is_user_facing() => {
            debug!(target: "inventory", user, error = %e, "Rejected inventory command");
            e.user_message()
        }
        Err(e) => {
            app_state.inventory.report_failure(user, &e).await;
            e.user_message()
        }
    };
    msg.reply(&ctx.http, reply).await.ok();
}
