// Tests for the async controller wrapping the event store.
use calstore::EventStore;
use calstore::config::Config;
use calstore::controller::EventController;
use calstore::model::{EventData, RecurrenceKind, RecurrenceRule};
use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;

fn at(d: u32, h: u32, m: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 9, d, h, m, 0).unwrap()
}

#[tokio::test]
async fn test_driver_sequence() {
    let calendar = EventController::from_config(&Config::default());

    let event = calendar
        .create_event(
            EventData::new("Event 1", at(20, 10, 0), at(20, 11, 0))
                .with_recurrence(RecurrenceRule::new(RecurrenceKind::Daily, 2).with_count(5)),
            false,
        )
        .await
        .unwrap();

    let weekly = RecurrenceRule::new(RecurrenceKind::Weekly, 2);
    let updated = calendar
        .set_recurrence_rule(&event.id, weekly.clone())
        .await
        .unwrap();
    assert_eq!(updated.recurrence, Some(weekly));

    let rejected = calendar
        .create_event(EventData::new("Event 2", at(20, 10, 30), at(20, 11, 30)), false)
        .await;
    assert!(rejected.unwrap_err().is_overlap());

    let event3 = calendar
        .create_event(EventData::new("Event 3", at(21, 14, 0), at(21, 15, 0)), true)
        .await
        .unwrap();

    let in_range = calendar
        .list_events_in_range(
            at(20, 0, 0),
            Utc.with_ymd_and_hms(2023, 9, 21, 23, 59, 59).unwrap(),
        )
        .await;
    let titles: Vec<_> = in_range.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Event 1", "Event 3"]);

    let moved = calendar
        .update_event(
            &event.id,
            EventData::new("Updated Event 1", at(20, 11, 30), at(20, 12, 30)),
            false,
        )
        .await
        .unwrap();
    assert_eq!(moved.id, event.id);

    let deletion = calendar.delete_event(&in_range[0].id).await.unwrap();
    assert_eq!(deletion.remaining.len(), 1);
    assert_eq!(deletion.remaining[0].id, event3.id);

    assert!(calendar.delete_event(&event.id).await.unwrap_err().is_not_found());
    assert_eq!(calendar.snapshot().await.len(), 1);
}

#[tokio::test]
async fn test_default_helpers_follow_config() {
    let permissive = Config {
        allow_overlap_by_default: true,
        ..Config::default()
    };
    let calendar = EventController::from_config(&permissive);
    calendar
        .create_event_default(EventData::new("A", at(20, 10, 0), at(20, 11, 0)))
        .await
        .unwrap();
    let b = calendar
        .create_event_default(EventData::new("B", at(20, 10, 30), at(20, 11, 30)))
        .await;
    assert!(b.is_ok());

    let strict = EventController::from_config(&Config::default());
    let a = strict
        .create_event_default(EventData::new("A", at(20, 10, 0), at(20, 11, 0)))
        .await
        .unwrap();
    strict
        .create_event_default(EventData::new("C", at(20, 12, 0), at(20, 13, 0)))
        .await
        .unwrap();
    let err = strict
        .update_event_default(&a.id, EventData::new("A", at(20, 12, 30), at(20, 13, 30)))
        .await
        .unwrap_err();
    assert!(err.is_overlap());
}

#[tokio::test]
async fn test_config_enables_time_order_check() {
    let config = Config {
        enforce_time_order: true,
        ..Config::default()
    };
    let calendar = EventController::from_config(&config);
    let result = calendar
        .create_event(EventData::new("Backwards", at(20, 11, 0), at(20, 10, 0)), true)
        .await;
    assert!(result.is_err());
    assert!(calendar.snapshot().await.is_empty());
}

#[tokio::test]
async fn test_concurrent_creates_cannot_both_claim_a_slot() {
    let calendar = EventController::new(Arc::new(Mutex::new(EventStore::new())));

    let mut handles = Vec::new();
    for i in 0..8 {
        let calendar = calendar.clone();
        handles.push(tokio::spawn(async move {
            calendar
                .create_event(
                    EventData::new(format!("Contender {}", i), at(20, 9, 0), at(20, 10, 0)),
                    false,
                )
                .await
        }));
    }

    let mut successes = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            successes += 1;
        }
    }
    assert_eq!(successes, 1, "Exactly one create should win the slot");
    assert_eq!(calendar.snapshot().await.len(), 1);
}

#[tokio::test]
async fn test_shared_store_is_visible_through_clones() {
    let store = Arc::new(Mutex::new(EventStore::new()));
    let calendar = EventController::new(store.clone());
    let other = calendar.clone();

    let event = calendar
        .create_event(EventData::new("Shared", at(20, 8, 0), at(20, 9, 0)), false)
        .await
        .unwrap();

    assert_eq!(other.snapshot().await, vec![event.clone()]);
    assert_eq!(store.lock().await.get(&event.id), Some(&event));
    assert!(other.export_ics().await.contains(&event.id));
}
