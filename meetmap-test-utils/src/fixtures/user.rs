use serde_json::{json, Value};

use crate::constant::{TEST_ORGANIZER_ID, TEST_USER_ID};

/// Create a participant account body.
pub fn participant_json() -> Value {
    json!({
        "role": "participant",
        "id": TEST_USER_ID,
        "username": "participant",
        "email": "participant@example.com"
    })
}

/// Create an organizer account body with an activity area.
pub fn organizer_json(activity_area: &str) -> Value {
    json!({
        "role": "organizer",
        "id": TEST_ORGANIZER_ID,
        "username": "organizer",
        "email": "organizer@example.com",
        "description": "Runs test events",
        "activityArea": activity_area,
        "eventIds": ["1"]
    })
}

pub fn friend_json(id: &str, name: &str) -> Value {
    json!({ "id": id, "name": name })
}

pub fn friend_request_json(id: &str, sender_id: &str) -> Value {
    json!({
        "id": id,
        "sender": friend_json(sender_id, &format!("User {}", sender_id))
    })
}
