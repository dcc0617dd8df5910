//! End-to-end command handling against a temp-dir store and the fake platform.
mod common;

use armory_bot::commands::inventory::logic::parse_command;
use armory_bot::database::models::{Category, Direction};
use armory_bot::error::BotError;
use common::{Harness, admin_channel, display_channel, sample_inventory};

#[tokio::test]
async fn add_guns_resolves_stored_key_and_refreshes_display() {
    let h = Harness::new(&sample_inventory()).await;
    let cmd = parse_command("add-guns 3 ak47").unwrap().unwrap();

    let m = h.service.execute("rook", &cmd).await.unwrap();
    assert_eq!(m.category, Category::Guns);
    assert_eq!(m.key, "AK47");
    assert_eq!((m.before, m.after, m.amount), (5, 8, 3));
    assert_eq!(m.direction, Direction::Add);

    let doc = h.store.load_inventory().await.unwrap();
    assert_eq!(doc.guns.get("AK47"), Some(&8));
    assert_eq!(doc.guns.len(), 1);

    let display = h.display_id().await.expect("display pointer saved");
    let body = h.platform.content(display).unwrap();
    assert!(body.contains("• Ak47 → 8"), "{body}");

    let audit = h.platform.sent_to(admin_channel());
    assert_eq!(audit.len(), 1);
    assert!(audit[0].contains("**Before:** 5"));
    assert!(audit[0].contains("**After:** 8"));
    assert!(audit[0].contains("**By:** rook"));
}

#[tokio::test]
async fn take_armor_clamps_at_zero() {
    let h = Harness::new(&sample_inventory()).await;
    let cmd = parse_command("take-armor 5").unwrap().unwrap();

    let m = h.service.execute("rook", &cmd).await.unwrap();
    assert_eq!((m.before, m.after), (2, 0));
    assert_eq!(h.store.load_inventory().await.unwrap().armor, 0);
}

#[tokio::test]
async fn unknown_ammo_type_changes_nothing() {
    let h = Harness::new(&sample_inventory()).await;
    let before = std::fs::read(h.store.inventory_path()).unwrap();
    let cmd = parse_command("take-ammo 1 incendiary").unwrap().unwrap();

    let err = h.service.execute("rook", &cmd).await.unwrap_err();
    assert!(err.is_user_facing());
    assert_eq!(err.user_message(), "❌ Ammo type not found.");
    assert!(matches!(err, BotError::NotFound { category: Category::Ammo, .. }));

    let after = std::fs::read(h.store.inventory_path()).unwrap();
    assert_eq!(before, after);
    assert!(h.platform.sent_to(admin_channel()).is_empty());
    assert!(h.platform.sent_to(display_channel()).is_empty());
}

#[tokio::test]
async fn audit_failure_keeps_the_mutation() {
    let h = Harness::new(&sample_inventory()).await;
    h.platform.fail_sends_to(admin_channel());
    let cmd = parse_command("add-ammo 5 9MM").unwrap().unwrap();

    let m = h.service.execute("rook", &cmd).await.unwrap();
    assert_eq!((m.key.as_str(), m.after), ("9mm", 15));
    assert_eq!(h.store.load_inventory().await.unwrap().ammo.get("9mm"), Some(&15));
}

#[tokio::test]
async fn display_failure_keeps_the_mutation() {
    let h = Harness::new(&sample_inventory()).await;
    h.platform.fail_sends_to(display_channel());
    let cmd = parse_command("itakeguns 1 Ak47").unwrap().unwrap();

    let m = h.service.execute("rook", &cmd).await.unwrap();
    assert_eq!(m.after, 4);
    assert_eq!(h.store.load_inventory().await.unwrap().guns.get("AK47"), Some(&4));
    assert_eq!(h.platform.sent_to(admin_channel()).len(), 1);
}

#[tokio::test]
async fn corrupt_inventory_fails_without_side_effects() {
    let h = Harness::new(&sample_inventory()).await;
    std::fs::write(h.store.inventory_path(), "{ not json").unwrap();
    let cmd = parse_command("add-armor 1").unwrap().unwrap();

    let err = h.service.execute("rook", &cmd).await.unwrap_err();
    assert!(matches!(err, BotError::Parse { .. }));
    assert!(!err.is_user_facing());
    assert!(h.platform.sent_to(admin_channel()).is_empty());

    h.service.report_failure("rook", &err).await;
    let notices = h.platform.sent_to(admin_channel());
    assert_eq!(notices.len(), 1);
    assert!(notices[0].contains("Inventory command failed"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_commands_are_serialized() {
    let h = Harness::new(&sample_inventory()).await;

    let mut tasks = Vec::new();
    for _ in 0..20 {
        let service = h.service.clone();
        tasks.push(tokio::spawn(async move {
            let cmd = parse_command("add-armor 1").unwrap().unwrap();
            service.execute("rook", &cmd).await.unwrap()
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let doc = h.store.load_inventory().await.unwrap();
    assert_eq!(doc.armor, 22);
    assert_eq!(h.platform.sent_to(admin_channel()).len(), 20);

    let display = h.display_id().await.unwrap();
    let body = h.platform.content(display).unwrap();
    assert!(body.contains("**🛡️ Armor**\n22"), "{body}");
}
