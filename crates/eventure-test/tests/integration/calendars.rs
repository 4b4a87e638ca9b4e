//! Calendar scenarios.

use eventure_test::service::{CalendarInput, EventInput, ServiceError};

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn calendars_follow_the_same_guard_as_events() {
    let app = TestApp::new().await;
    let home = app
        .calendars
        .create_calendar(Some(BOB), calendar("Home"))
        .await
        .expect("create");

    let update = app
        .calendars
        .update_calendar(Some(ALICE), home.id, calendar("Mine now"))
        .await;
    let Err(ServiceError::Forbidden(message)) = &update else {
        panic!("expected Forbidden, got {update:?}");
    };
    assert_eq!(message, "Not allowed to update this calendar");

    let delete = app.calendars.delete_calendar(Some(ALICE), home.id).await;
    assert!(matches!(delete, Err(ServiceError::Forbidden(_))), "{delete:?}");

    let renamed = app
        .calendars
        .update_calendar(
            Some(BOB),
            home.id,
            CalendarInput {
                name: "House".to_string(),
                color: None,
            },
        )
        .await
        .expect("update");
    assert_eq!(renamed.id, home.id);
    assert_eq!(renamed.name, "House");
}

#[test_log::test(tokio::test)]
async fn deleting_a_calendar_keeps_its_events() {
    let app = TestApp::new().await;
    let work = app
        .calendars
        .create_calendar(Some(ALICE), calendar("Work"))
        .await
        .expect("create calendar");
    let event = app
        .events
        .create_event(
            Some(ALICE),
            EventInput {
                calendar_id: Some(work.id),
                ..hour_event("Review", None)
            },
        )
        .await
        .expect("create event");

    app.calendars
        .delete_calendar(Some(ALICE), work.id)
        .await
        .expect("delete");

    let stored = app.stored_event(event.id).await.expect("event kept");
    assert_eq!(stored.calendar_id, None);
    assert!(
        app.calendars
            .list_calendars(Some(ALICE))
            .await
            .expect("list")
            .is_empty()
    );
}

#[test_log::test(tokio::test)]
async fn listing_without_identity_returns_everything() {
    let app = TestApp::new().await;
    for (owner, name) in [(ALICE, "Work"), (BOB, "Home"), (ALICE, "Gym")] {
        app.calendars
            .create_calendar(Some(owner), calendar(name))
            .await
            .expect("create");
    }

    let names = |calendars: Vec<eventure_test::store::Calendar>| {
        calendars
            .into_iter()
            .map(|calendar| calendar.name)
            .collect::<Vec<_>>()
    };
    assert_eq!(
        names(app.calendars.list_calendars(Some(ALICE)).await.expect("list")),
        ["Work", "Gym"]
    );
    assert_eq!(
        names(app.calendars.list_calendars(None).await.expect("list")),
        ["Work", "Home", "Gym"]
    );
}
