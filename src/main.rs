use std::sync::Arc;

use anyhow::Context as _;
use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use armory_bot::AppState;
use armory_bot::config::Config;
use armory_bot::database::store::JsonStore;
use armory_bot::handler::Handler;
use armory_bot::services::audit::AuditLog;
use armory_bot::services::display::DisplaySync;
use armory_bot::services::inventory::InventoryService;
use armory_bot::services::platform::DiscordPlatform;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the variables may come from the real environment.
    dotenv::dotenv().ok();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,serenity=warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}. Set it in the environment or a .env file.");
            return Ok(());
        }
    };

    let store = JsonStore::open(&config.inventory_file, &config.display_message_file)
        .await
        .context("Failed to initialise inventory storage")?;

    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&config.token, intents)
        .event_handler(Handler)
        .await
        .context("Error creating the Discord client")?;

    let inventory = InventoryService::new(
        store,
        Arc::new(DiscordPlatform::new(client.http.clone())),
        DisplaySync::new(config.display_channel),
        AuditLog::new(config.admin_channel),
    );
    let app_state = Arc::new(AppState {
        inventory: Arc::new(inventory),
        prefix: config.prefix,
    });

    {
        let mut data = client.data.write().await;
        data.insert::<AppState>(app_state);
    }

    info!(prefix = %config.prefix, "Starting inventory bot");
    if let Err(why) = client.start().await {
        error!("Login failed: {why}");
    }
    Ok(())
}
