use crate::commands::inventory::logic::{parse_command, strip_prefix};
use crate::{AppState, commands};
use serenity::async_trait;
use serenity::client::Context;
use serenity::model::{channel::Message, gateway::Ready};
use serenity::prelude::EventHandler;
use tracing::{error, info};

pub struct Handler;

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            return;
        };
        let Some(body) = strip_prefix(&msg.content, app_state.prefix) else {
            return;
        };
        // Unrecognised commands are ignored without a reply.
        let Some(parsed) = parse_command(body) else {
            return;
        };
        commands::inventory::run_prefix(&ctx, &msg, parsed).await;
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(target: "handler", user = %ready.user.name, "Connected and ready");
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            error!(target: "handler", "AppState missing from TypeMap");
            return;
        };
        if let Err(e) = app_state.inventory.refresh_display().await {
            error!(target: "inventory.display", error = %e, "Initial display refresh failed");
        }
    }
}
