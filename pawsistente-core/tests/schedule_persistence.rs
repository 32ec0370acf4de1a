use chrono::{Duration, TimeZone, Utc};
use pawsistente_core::constants::STATE_STORAGE_KEY;
use pawsistente_core::schedule::{
    FileStorage, MemoryStorage, Phase, ScheduleState, ScheduleStateManager, StateStorage,
};
use pawsistente_core::{Day, Event};

fn make_event(id: &str, hour: u32) -> Event {
    let mut event = Event::new(
        id,
        format!("Panel {}", id),
        Utc.with_ymd_and_hms(2025, 10, 24, hour, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2025, 10, 24, hour + 1, 0, 0).unwrap(),
        Day::Friday,
        format!("{:02}:00-{:02}:00", hour, hour + 1),
    )
    .unwrap();
    event.location = "Salón B".to_string();
    event.tags = vec!["Social".to_string()];
    event
}

fn stored_state(storage: &impl StateStorage) -> serde_json::Value {
    let raw = storage
        .read(STATE_STORAGE_KEY)
        .unwrap()
        .expect("state should be stored");
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_state_survives_a_new_session() {
    let dir = tempfile::tempdir().unwrap();

    let mut manager = ScheduleStateManager::create(FileStorage::new(dir.path()));
    manager.set_selected_days(vec![Day::Friday, Day::Saturday]);
    manager.add_selected_event(make_event("event_1", 16));
    manager.add_selected_event(make_event("event_2", 18));
    manager.remove_selected_event("event_2");
    manager.add_rejected_event("event_9");
    manager.move_rejected_to_unseen();
    manager.set_current_state(Phase::EventBrowsing);
    manager.set_current_event_index(4);
    let before = manager.snapshot().clone();
    let storage = manager.dispose();

    let reloaded = ScheduleStateManager::create(storage);

    assert_eq!(reloaded.snapshot(), &before);
    assert_eq!(reloaded.current_state(), Phase::EventBrowsing);
    assert_eq!(reloaded.rejected_events(), ["event_2".to_string(), "event_9".to_string()]);
}

#[test]
fn test_snapshot_uses_camel_case_keys() {
    let mut manager = ScheduleStateManager::create(MemoryStorage::new());
    manager.set_selected_days(vec![Day::Thursday]);
    manager.set_current_state(Phase::Summary);
    let storage = manager.dispose();

    let json = stored_state(&storage);

    assert_eq!(json["selectedDays"], serde_json::json!(["Thursday"]));
    assert_eq!(json["currentState"], "summary");
    assert!(json["lastUpdated"].is_i64(), "lastUpdated is epoch milliseconds");
    assert!(json["unseenEvents"].is_array());
}

#[test]
fn test_stale_state_is_discarded_on_load() {
    let mut stale = ScheduleState::default();
    stale.selected_days = vec![Day::Sunday];
    stale.selected_events = vec![make_event("event_1", 10)];
    stale.current_state = Phase::Summary;
    stale.last_updated = Utc::now() - Duration::days(8);

    let mut storage = MemoryStorage::new();
    storage
        .write(STATE_STORAGE_KEY, &serde_json::to_string(&stale).unwrap())
        .unwrap();

    let manager = ScheduleStateManager::create(storage);

    assert!(!manager.has_progress());
    assert!(manager.selected_events().is_empty());
    assert_eq!(manager.current_state(), Phase::DaySelection);

    // The reset is persisted too
    let storage = manager.dispose();
    let json = stored_state(&storage);
    assert_eq!(json["selectedDays"], serde_json::json!([]));
}

#[test]
fn test_recent_state_is_kept() {
    let mut recent = ScheduleState::default();
    recent.selected_days = vec![Day::Thursday];
    recent.last_updated = Utc::now() - Duration::days(6);

    let mut storage = MemoryStorage::new();
    storage
        .write(STATE_STORAGE_KEY, &serde_json::to_string(&recent).unwrap())
        .unwrap();

    let manager = ScheduleStateManager::create(storage);

    assert_eq!(manager.selected_days(), [Day::Thursday]);
}

#[test]
fn test_corrupt_state_starts_over() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::new(dir.path());
    storage.write(STATE_STORAGE_KEY, "{not json").unwrap();

    let manager = ScheduleStateManager::create(storage);

    assert!(!manager.has_progress());
    assert_eq!(manager.current_state(), Phase::DaySelection);
}

#[test]
fn test_missing_fields_take_initial_values() {
    let last_updated = Utc::now().timestamp_millis();
    let partial = format!(
        r#"{{"selectedDays":["Saturday"],"rejectedEvents":["event_3"],"currentState":"event-browsing","lastUpdated":{}}}"#,
        last_updated
    );

    let mut storage = MemoryStorage::new();
    storage.write(STATE_STORAGE_KEY, &partial).unwrap();

    let manager = ScheduleStateManager::create(storage);

    assert_eq!(manager.selected_days(), [Day::Saturday]);
    assert_eq!(manager.rejected_events(), ["event_3".to_string()]);
    assert!(manager.unseen_events().is_empty());
    assert_eq!(manager.current_state(), Phase::EventBrowsing);
    assert_eq!(manager.current_group_index(), 0);
}

#[test]
fn test_snapshot_without_timestamp_is_discarded() {
    let mut storage = MemoryStorage::new();
    storage
        .write(
            STATE_STORAGE_KEY,
            r#"{"selectedDays":["Saturday"],"rejectedEvents":["event_4"]}"#,
        )
        .unwrap();

    let manager = ScheduleStateManager::create(storage);

    assert!(manager.selected_days().is_empty(), "snapshot of unknown age is stale");
    assert!(manager.rejected_events().is_empty());
    assert_eq!(manager.current_state(), Phase::DaySelection);
}

#[test]
fn test_snapshot_with_inverted_event_is_discarded() {
    let last_updated = Utc::now().timestamp_millis();
    let snapshot = format!(
        r#"{{"selectedDays":["Thursday"],"selectedEvents":[{{"id":"event_1","title":"Backwards",
        "startTime":"2025-10-23T12:00:00Z","endTime":"2025-10-23T10:00:00Z","day":"Thursday",
        "timeSlot":"06:00-04:00"}}],"lastUpdated":{}}}"#,
        last_updated
    );

    let mut storage = MemoryStorage::new();
    storage.write(STATE_STORAGE_KEY, &snapshot).unwrap();

    let manager = ScheduleStateManager::create(storage);

    assert!(manager.selected_events().is_empty());
    assert!(!manager.has_progress(), "a snapshot with an invalid event starts over");
}

#[test]
fn test_unwritable_directory_keeps_memory_state() {
    let dir = tempfile::tempdir().unwrap();
    // A regular file where the storage directory should be makes every write fail
    let blocker = dir.path().join("blocked");
    std::fs::write(&blocker, "").unwrap();

    let mut manager = ScheduleStateManager::create(FileStorage::new(&blocker));
    manager.add_selected_event(make_event("event_1", 12));
    manager.set_selected_days(vec![Day::Friday]);

    assert!(manager.is_selected("event_1"));
    assert_eq!(manager.selected_days(), [Day::Friday]);
}

#[test]
fn test_select_then_remove_leaves_id_rejected() {
    let mut manager = ScheduleStateManager::create(MemoryStorage::new());

    manager.add_selected_event(make_event("5", 10));
    manager.remove_selected_event("5");

    assert!(manager.selected_events().is_empty());
    assert_eq!(manager.rejected_events(), ["5".to_string()]);
}

#[test]
fn test_review_skipped_events() {
    let mut manager = ScheduleStateManager::create(MemoryStorage::new());
    manager.add_rejected_event("2");
    manager.add_rejected_event("7");

    manager.move_rejected_to_unseen();

    assert_eq!(manager.unseen_events(), ["2".to_string(), "7".to_string()]);
    assert_eq!(manager.rejected_events(), ["2".to_string(), "7".to_string()]);
}
