//! Read-path expansion scenarios.

use chrono::TimeDelta;
use eventure_test::config::RecurrenceConfig;

use super::helpers::*;

const SEED: &str = r##"{
    "owners": [{ "id": 1, "username": "alice" }, { "id": 2, "username": "bob" }],
    "calendars": [{ "id": 1, "name": "Personal", "color": "#00aa00", "owner": "alice" }],
    "events": [
        { "id": 5, "title": "Gym", "startTime": "2024-01-01T09:00:00Z",
          "endTime": "2024-01-01T10:00:00Z", "owner": "alice", "calendarId": 1,
          "isRecurring": true, "recurrenceRule": "FREQ=DAILY;COUNT=3",
          "recurrenceEndDate": null },
        { "id": 6, "title": "Broken", "startTime": "2024-01-01T12:00:00Z",
          "endTime": "2024-01-01T13:00:00Z", "owner": "alice", "calendarId": null,
          "isRecurring": true, "recurrenceRule": "FREQ=FORTNIGHTLY",
          "recurrenceEndDate": null },
        { "id": 7, "title": "Lunch", "startTime": "2024-01-02T12:00:00Z",
          "endTime": "2024-01-02T12:30:00Z", "owner": "bob", "calendarId": null,
          "recurrenceRule": null, "recurrenceEndDate": null }
    ]
}"##;

#[test_log::test(tokio::test)]
async fn daily_count_scenario() {
    let app = TestApp::seeded(SEED);

    let listed = app.events.list_events(Some(ALICE)).await.expect("list");

    assert_eq!(ids(&listed), [5, -6001, -6002, 6]);
    let expected_starts = [at(2024, 1, 2, 9, 0), at(2024, 1, 3, 9, 0)];
    for (occurrence, start) in listed[1..3].iter().zip(expected_starts) {
        assert_eq!(occurrence.start_time, Some(start));
        assert_eq!(occurrence.duration(), Some(TimeDelta::hours(1)));
        assert_eq!(occurrence.title, "Gym");
        assert_eq!(occurrence.calendar_id, Some(1));
        assert!(occurrence.is_recurring);
    }
}

#[test_log::test(tokio::test)]
async fn seed_loads_every_table() {
    let app = TestApp::seeded(SEED);

    let calendars = app.calendars.list_calendars(Some(ALICE)).await.expect("list");

    assert_eq!(calendars.len(), 1);
    assert_eq!(calendars[0].color.as_deref(), Some("#00aa00"));
    assert_eq!(app.stored_events().await.len(), 3);
}

#[test_log::test(tokio::test)]
async fn invalid_rule_returns_event_exactly_once() {
    let app = TestApp::seeded(SEED);

    let listed = app.events.list_events(Some(ALICE)).await.expect("list");

    let broken: Vec<_> = listed.iter().filter(|event| event.title == "Broken").collect();
    assert_eq!(broken.len(), 1);
    assert_eq!(broken[0].id, 6);
}

#[test_log::test(tokio::test)]
async fn anonymous_listing_expands_every_owner() {
    let app = TestApp::seeded(SEED);

    let listed = app.events.list_events(None).await.expect("list");

    assert_eq!(ids(&listed), [5, -6001, -6002, 6, 7]);
}

#[test_log::test(tokio::test)]
async fn expansion_never_writes_to_the_store() {
    let app = TestApp::seeded(SEED);
    let before = app.stored_events().await;

    app.events.list_events(None).await.expect("list");
    app.events.list_events(Some(ALICE)).await.expect("list");

    assert_eq!(app.stored_events().await, before);
}

#[test_log::test(tokio::test)]
async fn unbounded_daily_stays_within_default_window() {
    let app = TestApp::new().await;
    let base = app
        .events
        .create_event(Some(BOB), hour_event("Walk", Some("FREQ=DAILY")))
        .await
        .expect("create");

    let listed = app.events.list_events(Some(BOB)).await.expect("list");

    let window_end = at(2024, 7, 1, 9, 0);
    let occurrences = &listed[1..];
    assert_eq!(listed[0].id, base.id);
    // Jan 2 through Jul 1 inclusive.
    assert_eq!(occurrences.len(), 182);
    assert!(occurrences.iter().all(|occurrence| {
        occurrence.id < 0
            && occurrence.start_time > base.start_time
            && occurrence.start_time <= Some(window_end)
    }));
}

#[test_log::test(tokio::test)]
async fn recurrence_end_date_overrides_default_window() {
    let app = TestApp::new().await;
    let mut input = hour_event("Sprint", Some("FREQ=WEEKLY;INTERVAL=2"));
    input.recurrence_end_date = Some(at(2024, 12, 31, 0, 0));
    app.events
        .create_event(Some(ALICE), input)
        .await
        .expect("create");

    let listed = app.events.list_events(Some(ALICE)).await.expect("list");

    // 2024-01-01 plus every second Monday through 2024-12-30.
    assert_eq!(listed.len(), 27);
    assert_eq!(listed.last().and_then(|event| event.start_time), Some(at(2024, 12, 30, 9, 0)));
}

#[test_log::test(tokio::test)]
async fn configured_cap_truncates_expansion() {
    let app = TestApp::with_config(RecurrenceConfig {
        default_window_months: 12,
        max_occurrences: 10,
    })
    .await;
    app.events
        .create_event(Some(ALICE), hour_event("Pill", Some("FREQ=DAILY")))
        .await
        .expect("create");

    let listed = app.events.list_events(Some(ALICE)).await.expect("list");

    assert_eq!(listed.len(), 11);
    assert_eq!(listed.last().map(|event| event.id), Some(-2010));
}
