//! Event create/update/delete scenarios, including the ownership guard.

use eventure_test::service::{EventInput, ServiceError};

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn delete_by_non_owner_is_forbidden_and_store_unchanged() {
    let app = TestApp::new().await;
    let event = app
        .events
        .create_event(Some(ALICE), hour_event("Dentist", None))
        .await
        .expect("create");
    let before = app.stored_events().await;

    let result = app.events.delete_event(Some(BOB), event.id).await;

    let Err(ServiceError::Forbidden(message)) = &result else {
        panic!("expected Forbidden, got {result:?}");
    };
    assert_eq!(message, "Not allowed to delete this event");
    assert_eq!(app.stored_events().await, before);
}

#[test_log::test(tokio::test)]
async fn update_with_missing_calendar_is_not_found_and_event_unchanged() {
    let app = TestApp::new().await;
    let event = app
        .events
        .create_event(Some(ALICE), hour_event("Dentist", None))
        .await
        .expect("create");

    let result = app
        .events
        .update_event(
            Some(ALICE),
            event.id,
            EventInput {
                calendar_id: Some(999),
                ..hour_event("Moved dentist", Some("FREQ=YEARLY"))
            },
        )
        .await;

    assert!(matches!(result, Err(ServiceError::NotFound(_))), "{result:?}");
    assert_eq!(app.stored_event(event.id).await, Some(event));
}

#[test_log::test(tokio::test)]
async fn owner_can_update_then_delete() {
    let app = TestApp::new().await;
    let work = app
        .calendars
        .create_calendar(Some(ALICE), calendar("Work"))
        .await
        .expect("create calendar");
    let event = app
        .events
        .create_event(Some(ALICE), hour_event("Standup", None))
        .await
        .expect("create");
    assert_eq!(event.calendar_id, None);

    let updated = app
        .events
        .update_event(
            Some(ALICE),
            event.id,
            EventInput {
                calendar_id: Some(work.id),
                completed: true,
                ..hour_event("Standup", Some("FREQ=DAILY;COUNT=5"))
            },
        )
        .await
        .expect("update");
    assert_eq!(updated.calendar_id, Some(work.id));
    assert!(updated.is_recurring);
    assert_eq!(app.stored_event(event.id).await, Some(updated));

    app.events
        .delete_event(Some(ALICE), event.id)
        .await
        .expect("delete");
    assert_eq!(app.stored_event(event.id).await, None);
}

#[test_log::test(tokio::test)]
async fn unresolvable_actor_cannot_create() {
    let app = TestApp::new().await;

    for actor in [None, Some("nobody")] {
        let result = app.events.create_event(actor, hour_event("Ghost", None)).await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))), "{result:?}");
    }
    assert!(app.stored_events().await.is_empty());
}

#[test_log::test(tokio::test)]
async fn seeded_rows_without_owner_cannot_be_mutated() {
    let app = TestApp::seeded(
        r#"{
            "owners": [{ "id": 1, "username": "alice" }],
            "events": [{ "id": 4, "title": "Legacy", "startTime": null, "endTime": null,
                         "owner": null, "calendarId": null,
                         "recurrenceRule": null, "recurrenceEndDate": null }]
        }"#,
    );

    let result = app.events.delete_event(Some(ALICE), 4).await;
    assert!(matches!(result, Err(ServiceError::Forbidden(_))), "{result:?}");

    let created = app
        .events
        .create_event(Some(ALICE), hour_event("New", None))
        .await
        .expect("create");
    assert_eq!(created.id, 5);
}
