//! In-memory chat platform and fixtures shared by the integration tests.
#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex};

use armory_bot::database::models::InventoryDocument;
use armory_bot::database::store::JsonStore;
use armory_bot::error::{BotError, BotResult};
use armory_bot::services::audit::AuditLog;
use armory_bot::services::display::DisplaySync;
use armory_bot::services::inventory::InventoryService;
use armory_bot::services::platform::ChatPlatform;
use serenity::model::id::{ChannelId, MessageId};
use tempfile::TempDir;

pub fn display_channel() -> ChannelId {
    ChannelId::new(10)
}

pub fn admin_channel() -> ChannelId {
    ChannelId::new(20)
}

#[derive(Default)]
struct FakeState {
    next_id: u64,
    messages: HashMap<u64, (ChannelId, String)>,
    sent: Vec<(ChannelId, String)>,
    edits: Vec<(MessageId, String)>,
    failing_channels: HashSet<ChannelId>,
}

/// Records every send and edit. Messages can be deleted and channels can be
/// made to reject sends.
#[derive(Default)]
pub struct FakePlatform {
    state: Mutex<FakeState>,
}

impl FakePlatform {
    pub fn delete(&self, id: MessageId) {
        self.state.lock().unwrap().messages.remove(&id.get());
    }

    pub fn fail_sends_to(&self, channel: ChannelId) {
        self.state.lock().unwrap().failing_channels.insert(channel);
    }

    pub fn content(&self, id: MessageId) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .messages
            .get(&id.get())
            .map(|(_, body)| body.clone())
    }

    pub fn sent_to(&self, channel: ChannelId) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .sent
            .iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, body)| body.clone())
            .collect()
    }

    pub fn edit_count(&self) -> usize {
        self.state.lock().unwrap().edits.len()
    }
}

#[async_trait::async_trait]
impl ChatPlatform for FakePlatform {
    async fn fetch_message(&self, channel: ChannelId, message: MessageId) -> BotResult<()> {
        match self.state.lock().unwrap().messages.get(&message.get()) {
            Some((c, _)) if *c == channel => Ok(()),
            _ => Err(BotError::Platform("Unknown Message".into())),
        }
    }

    async fn send_message(&self, channel: ChannelId, content: &str) -> BotResult<MessageId> {
        let mut state = self.state.lock().unwrap();
        if state.failing_channels.contains(&channel) {
            return Err(BotError::Platform("Missing Access".into()));
        }
        state.next_id += 1;
        let id = 1000 + state.next_id;
        state.messages.insert(id, (channel, content.to_string()));
        state.sent.push((channel, content.to_string()));
        Ok(MessageId::new(id))
    }

    async fn edit_message(
        &self,
        _channel: ChannelId,
        message: MessageId,
        content: &str,
    ) -> BotResult<()> {
        let mut state = self.state.lock().unwrap();
        let Some(entry) = state.messages.get_mut(&message.get()) else {
            return Err(BotError::Platform("Unknown Message".into()));
        };
        entry.1 = content.to_string();
        state.edits.push((message, content.to_string()));
        Ok(())
    }
}

pub struct Harness {
    pub dir: TempDir,
    pub store: JsonStore,
    pub platform: Arc<FakePlatform>,
    pub service: Arc<InventoryService>,
}

impl Harness {
    pub async fn new(doc: &InventoryDocument) -> Self {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open(dir.path().join("data.json"), dir.path().join("display.json"))
            .await
            .unwrap();
        store.save_inventory(doc).await.unwrap();
        let platform = Arc::new(FakePlatform::default());
        let service = InventoryService::new(
            store.clone(),
            platform.clone(),
            DisplaySync::new(display_channel()),
            AuditLog::new(admin_channel()),
        );
        Self {
            dir,
            store,
            platform,
            service: Arc::new(service),
        }
    }

    pub async fn display_id(&self) -> Option<MessageId> {
        self.store
            .load_display_pointer()
            .await
            .unwrap()
            .map(|raw| MessageId::new(raw.parse().unwrap()))
    }
}

/// `{guns: {"AK47": 5}, armor: 2, ammo: {"9mm": 10}}`
pub fn sample_inventory() -> InventoryDocument {
    InventoryDocument {
        guns: BTreeMap::from([("AK47".to_string(), 5)]),
        armor: 2,
        ammo: BTreeMap::from([("9mm".to_string(), 10)]),
    }
}
