use serde_json::{json, Value};

use crate::constant::TEST_ORGANIZER_ID;

/// Create an event body with default test values.
///
/// # Arguments
/// - `id` - Event id
/// - `status` - Lifecycle status (`"upcoming"`, `"ongoing"` or `"held"`)
/// - `tags` - Fixed tag names such as `"CONFERENCE"`
pub fn event_json(id: &str, status: &str, tags: &[&str]) -> Value {
    json!({
        "id": id,
        "title": format!("Event {}", id),
        "description": "An event used in tests",
        "startsAt": "2025-03-14T18:00:00Z",
        "duration": "2 hours",
        "organizerId": TEST_ORGANIZER_ID,
        "organizerName": "Test Organizer",
        "status": status,
        "location": {
            "latitude": 52.52,
            "longitude": 13.405,
            "address": "Alexanderplatz 1, Berlin"
        },
        "tags": tags
    })
}

/// Create an event body with a moderation status.
pub fn moderated_event_json(id: &str, status: &str, moderation_status: &str) -> Value {
    let mut event = event_json(id, status, &[]);
    event["moderationStatus"] = json!(moderation_status);
    event
}

/// Create a comment body.
pub fn comment_json(id: &str, text: &str, rating: u8) -> Value {
    json!({
        "id": id,
        "authorId": "user-2",
        "authorName": "Commenter",
        "text": text,
        "rating": rating,
        "createdAt": "2025-03-15T10:00:00"
    })
}
