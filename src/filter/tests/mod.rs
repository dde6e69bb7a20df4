mod custom_tags_in;
mod filter_events;

use crate::model::{
    event::{Event, LifecycleStatus, Location},
    tag::{CustomTag, FixedTag, Tag},
};

use super::*;

/// Event with the fields the filter looks at, everything else defaulted.
fn event(id: &str, status: LifecycleStatus, tags: Vec<Tag>) -> Event {
    Event {
        id: id.to_string(),
        title: format!("Event {}", id),
        description: String::new(),
        starts_at: "2025-03-14T18:00:00Z".to_string(),
        duration: "2 hours".to_string(),
        organizer_id: None,
        organizer_name: "Organizer".to_string(),
        status,
        moderation_status: None,
        location: Location {
            latitude: 52.5,
            longitude: 13.4,
            address: "Somewhere".to_string(),
            image_url: None,
        },
        image_url: None,
        tags,
    }
}

fn named(id: &str, title: &str, organizer: &str) -> Event {
    let mut event = event(id, LifecycleStatus::Upcoming, Vec::new());
    event.title = title.to_string();
    event.organizer_name = organizer.to_string();
    event
}

fn starting(id: &str, starts_at: &str) -> Event {
    let mut event = event(id, LifecycleStatus::Upcoming, Vec::new());
    event.starts_at = starts_at.to_string();
    event
}

fn custom(id: &str, name: &str) -> Tag {
    Tag::Custom(CustomTag {
        id: id.to_string(),
        name: name.to_string(),
        color: None,
    })
}

fn ids(events: &[Event]) -> Vec<&str> {
    events.iter().map(|e| e.id.as_str()).collect()
}

/// The two-event collection used across scenarios.
fn conference_and_workshop() -> Vec<Event> {
    vec![
        event(
            "1",
            LifecycleStatus::Upcoming,
            vec![Tag::Fixed(FixedTag::Conference)],
        ),
        event(
            "2",
            LifecycleStatus::Held,
            vec![Tag::Fixed(FixedTag::Workshop)],
        ),
    ]
}
