// SPDX-License-Identifier: MPL-2.0
use front_desk::application::deletion::delete_all;
use front_desk::application::port::SharedDirectory;
use front_desk::config::{self, Config, GeneralConfig};
use front_desk::domain::notification::{DisplayMessage, NotificationId};
use front_desk::i18n::fluent::I18n;
use front_desk::test_utils::{sample_item, sample_items, InMemoryDirectory};
use front_desk::ui::history::pending::{SoftDeletes, UNDO_WINDOW};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let english = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&english, &config_path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load initial config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(i18n.tr("history-title"), "Notifications");

    let vietnamese = Config {
        general: GeneralConfig {
            language: Some("vi".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&vietnamese, &config_path).expect("Failed to write vi config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load vi config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "vi");
    assert_eq!(i18n.tr("history-title"), "Thông báo");
}

#[test]
fn cli_language_wins_over_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    let i18n = I18n::new(Some("vi".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "vi");
}

#[test]
fn undo_countdown_interpolates_seconds() {
    let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
    let text = i18n.tr_with_args("toast-undo-countdown", &[("seconds", "4")]);
    assert_eq!(text, "4s left to undo");
}

#[tokio::test]
async fn one_failing_delete_does_not_block_the_others() {
    let backend = Arc::new(InMemoryDirectory::with_items(sample_items(3)));
    backend.fail_delete_of(NotificationId::new(2));
    let directory: SharedDirectory = backend.clone();

    let ids = vec![
        NotificationId::new(1),
        NotificationId::new(2),
        NotificationId::new(3),
    ];
    let report = delete_all(directory, ids).await;

    assert_eq!(report.attempted(), 3);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, NotificationId::new(2));
    assert_eq!(backend.remaining_ids(), vec![NotificationId::new(2)]);
    for id in 1..=3 {
        assert_eq!(backend.delete_calls_for(NotificationId::new(id)), 1);
    }
}

#[tokio::test]
async fn expired_soft_delete_is_committed_exactly_once() {
    let backend = Arc::new(InMemoryDirectory::with_items(sample_items(2)));
    let directory: SharedDirectory = backend.clone();
    let start = Instant::now();

    let mut pending = SoftDeletes::new();
    pending.insert(sample_item(2), "Booking #2 confirmed", start);

    assert!(pending.sweep(start + Duration::from_secs(1)).is_empty());

    let after_window = start + UNDO_WINDOW + Duration::from_millis(1);
    let due = pending.sweep(after_window);
    assert_eq!(due, vec![NotificationId::new(2)]);
    delete_all(directory.clone(), due).await;

    // A second sweep and a late undo find nothing left to commit.
    let again = pending.sweep(after_window + Duration::from_secs(1));
    assert!(again.is_empty());
    assert!(pending.undo(NotificationId::new(2), after_window).is_none());
    delete_all(directory, again).await;

    assert_eq!(backend.delete_calls_for(NotificationId::new(2)), 1);
    assert_eq!(backend.remaining_ids(), vec![NotificationId::new(1)]);
}

#[tokio::test]
async fn undo_within_window_sends_nothing() {
    let backend = Arc::new(InMemoryDirectory::with_items(sample_items(1)));
    let directory: SharedDirectory = backend.clone();
    let start = Instant::now();
    let mut pending = SoftDeletes::new();
    pending.insert(sample_item(1), "Booking #1 confirmed", start);

    let restored = pending.undo(NotificationId::new(1), start + Duration::from_secs(2));
    assert_eq!(restored.map(|item| item.id), Some(NotificationId::new(1)));

    for elapsed in [UNDO_WINDOW, UNDO_WINDOW * 2] {
        let due = pending.sweep(start + elapsed + Duration::from_millis(1));
        delete_all(directory.clone(), due).await;
    }

    assert_eq!(backend.delete_calls_for(NotificationId::new(1)), 0);
    assert_eq!(backend.remaining_ids(), vec![NotificationId::new(1)]);
}

#[test]
fn booking_marker_becomes_a_view_booking_target() {
    let message = DisplayMessage::parse("Room 204 confirmed||bookingId=1187");
    assert_eq!(message.text, "Room 204 confirmed");
    assert_eq!(message.booking.map(|booking| booking.id()), Some(1187));

    let plain = DisplayMessage::parse("Housekeeping finished floor 3");
    assert_eq!(plain.text, "Housekeeping finished floor 3");
    assert!(plain.booking.is_none());
}
