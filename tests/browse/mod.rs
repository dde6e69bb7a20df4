use meetmap::{
    client::service::EventService,
    filter::{custom_tags_in, EventBrowser, FilterCriteria, Selection},
    model::{
        event::{LifecycleStatus, YearMonth},
        tag::{FixedTag, Tag},
    },
};
use meetmap_test_utils::prelude::*;
use serde_json::json;

use crate::client_for;

fn listing() -> Vec<serde_json::Value> {
    let mut conference = event::event_json("1", "upcoming", &["CONFERENCE"]);
    conference["title"] = json!("Rust Conference");

    let mut meetup = event::event_json("2", "held", &["MEETUP"]);
    meetup["startsAt"] = json!("2025-04-02T19:00:00");
    meetup["tags"] = json!(["MEETUP", { "id": "c1", "name": "Rustaceans", "color": "#b7410e" }]);

    let mut festival = event::event_json("3", "ongoing", &["FESTIVAL", "CONCERT"]);
    festival["title"] = json!("Riverside Music Festival");

    vec![conference, meetup, festival]
}

/// Expect the filters to narrow the loaded listing and a marker selection to survive only until
/// the filter changes
#[tokio::test]
async fn filter_and_select_loaded_events() {
    let test = TestBuilder::new()
        .with_events_endpoint(listing(), 1)
        .build()
        .await;
    let client = client_for(&test, None);

    let events = EventService::new(&client).list().await.unwrap();
    let mut browser = EventBrowser::new(events);
    assert_eq!(browser.visible().len(), 3);

    browser.update_criteria(|criteria| criteria.search = "river".to_string());
    let ids: Vec<_> = browser.visible().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["3"]);

    browser.update_criteria(|criteria| {
        criteria.search.clear();
        criteria.toggle_tag(Tag::Fixed(FixedTag::Meetup));
        criteria.toggle_status(LifecycleStatus::Held);
    });
    let ids: Vec<_> = browser.visible().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["2"]);
    assert_eq!(browser.active_filter_count(), 2);

    assert!(browser.select("1"));
    assert_eq!(browser.selection(), &Selection::SingleSelected("1".to_string()));
    assert_eq!(browser.visible()[0].id, "1");

    browser.set_criteria(FilterCriteria::default());
    assert_eq!(browser.selection(), &Selection::AllEvents);
    assert_eq!(browser.visible().len(), 3);

    test.assert_mocks();
}

/// Expect the month filter and the custom tags offered by the filter panel to come from the
/// loaded events
#[tokio::test]
async fn month_filter_and_custom_tags() {
    let test = TestBuilder::new()
        .with_events_endpoint(listing(), 1)
        .build()
        .await;
    let client = client_for(&test, None);

    let events = EventService::new(&client).list().await.unwrap();

    let custom = custom_tags_in(&events);
    assert_eq!(custom.len(), 1);
    assert_eq!(custom[0].label(), "Rustaceans");

    let mut browser = EventBrowser::new(events);
    browser.update_criteria(|criteria| criteria.month = YearMonth::new(2025, 4));

    let ids: Vec<_> = browser.visible().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["2"]);

    browser.update_criteria(|criteria| criteria.toggle_tag(custom[0].clone()));
    assert_eq!(browser.visible().len(), 1);
}
