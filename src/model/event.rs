use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::{tag::Tag, validation::ValidationError};

pub const TITLE_MIN_LEN: usize = 3;
pub const TITLE_MAX_LEN: usize = 100;

/// Lifecycle status of an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleStatus {
    Upcoming,
    Ongoing,
    Held,
}

impl LifecycleStatus {
    pub const ALL: [LifecycleStatus; 3] = [Self::Upcoming, Self::Ongoing, Self::Held];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Ongoing => "Ongoing",
            Self::Held => "Held",
        }
    }
}

/// Moderation status of an event, independent of its lifecycle status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ModerationStatus {
    pub const ALL: [ModerationStatus; 3] = [Self::Pending, Self::Approved, Self::Rejected];

    /// Path segment used by `/events/moderation/{status}`.
    pub fn as_path(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Location {
    pub fn has_valid_coordinates(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// A calendar month used by the date filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// Parses the `YYYY-MM` value produced by a month input.
    pub fn parse(value: &str) -> Option<Self> {
        let (year, month) = value.trim().split_once('-')?;
        Self::new(year.parse().ok()?, month.parse().ok()?)
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Event as displayed by the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Start timestamp exactly as the backend sent it.
    pub starts_at: String,
    /// Free-text duration, e.g. "2 hours".
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub organizer_id: Option<String>,
    #[serde(default)]
    pub organizer_name: String,
    pub status: LifecycleStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moderation_status: Option<ModerationStatus>,
    pub location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Event {
    /// Year and month of the start timestamp, `None` when it cannot be parsed.
    pub fn year_month(&self) -> Option<YearMonth> {
        parse_timestamp(&self.starts_at).map(|start| YearMonth {
            year: start.year(),
            month: start.month(),
        })
    }

    /// Start timestamp formatted for cards, falling back to the raw value.
    pub fn display_start(&self) -> String {
        match parse_timestamp(&self.starts_at) {
            Some(start) => start.format("%d %b %Y, %H:%M").to_string(),
            None => self.starts_at.clone(),
        }
    }

    /// Held events that never went through moderation.
    pub fn is_stale_pending(&self) -> bool {
        self.status == LifecycleStatus::Held
            && self.moderation_status == Some(ModerationStatus::Pending)
    }
}

/// Parses the timestamp formats the backend is known to emit.
///
/// Accepts RFC 3339, naive `YYYY-MM-DDTHH:MM[:SS]` (also with a space separator), and bare
/// `YYYY-MM-DD` dates. Offsets are dropped, the wall-clock time stays as written.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Some(date_time.naive_local());
    }

    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Form state for creating or editing an event.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub starts_at: String,
    pub duration: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub image_url: Option<String>,
    pub tags: Vec<Tag>,
}

impl EventDraft {
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            description: event.description.clone(),
            starts_at: event.starts_at.clone(),
            duration: event.duration.clone(),
            address: event.location.address.clone(),
            latitude: Some(event.location.latitude),
            longitude: Some(event.location.longitude),
            image_url: event.image_url.clone(),
            tags: event.tags.clone(),
        }
    }

    pub fn toggle_fixed_tag(&mut self, tag: crate::model::tag::FixedTag) {
        let tag = Tag::Fixed(tag);
        match self.tags.iter().position(|existing| existing.matches(&tag)) {
            Some(index) => {
                self.tags.remove(index);
            }
            None => self.tags.push(tag),
        }
    }

    /// Checks the draft before it is sent to the backend.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let title_len = self.title.trim().chars().count();
        if title_len < TITLE_MIN_LEN || title_len > TITLE_MAX_LEN {
            return Err(ValidationError::TitleLength {
                min: TITLE_MIN_LEN,
                max: TITLE_MAX_LEN,
            });
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::Required("description"));
        }
        if self.starts_at.trim().is_empty() {
            return Err(ValidationError::Required("start date"));
        }
        if parse_timestamp(&self.starts_at).is_none() {
            return Err(ValidationError::InvalidDate(self.starts_at.clone()));
        }
        if self.duration.trim().is_empty() {
            return Err(ValidationError::Required("duration"));
        }
        if self.address.trim().is_empty() {
            return Err(ValidationError::Required("address"));
        }
        let (Some(latitude), Some(longitude)) = (self.latitude, self.longitude) else {
            return Err(ValidationError::Required("location"));
        };
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(ValidationError::Coordinates {
                latitude,
                longitude,
            });
        }

        let mut seen = std::collections::HashSet::new();
        for tag in &self.tags {
            if let Tag::Custom(custom) = tag {
                if !seen.insert(custom.id.as_str()) {
                    return Err(ValidationError::DuplicateTag(custom.id.clone()));
                }
            }
        }

        Ok(())
    }

    /// Builds the request body, trimming free-text fields.
    pub fn to_payload(&self) -> Result<EventPayload, ValidationError> {
        self.validate()?;

        Ok(EventPayload {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            starts_at: self.starts_at.trim().to_string(),
            duration: self.duration.trim().to_string(),
            location: Location {
                latitude: self.latitude.unwrap_or_default(),
                longitude: self.longitude.unwrap_or_default(),
                address: self.address.trim().to_string(),
                image_url: None,
            },
            image_url: self.image_url.clone(),
            tags: self.tags.clone(),
        })
    }
}

/// Body of `POST /events` and `PUT /events/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    pub title: String,
    pub description: String,
    pub starts_at: String,
    pub duration: String,
    pub location: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub tags: Vec<Tag>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tag::{CustomTag, FixedTag};

    fn draft() -> EventDraft {
        EventDraft {
            title: "Rust Meetup".to_string(),
            description: "Monthly meetup".to_string(),
            starts_at: "2025-03-14T18:30".to_string(),
            duration: "2 hours".to_string(),
            address: "Main Street 1".to_string(),
            latitude: Some(52.52),
            longitude: Some(13.40),
            image_url: None,
            tags: vec![Tag::Fixed(FixedTag::Meetup)],
        }
    }

    /// Expect every supported timestamp format to resolve to the same month
    #[test]
    fn parses_supported_timestamp_formats() {
        for value in [
            "2025-03-14T18:30:00Z",
            "2025-03-14T18:30:00+02:00",
            "2025-03-14T18:30:00.000",
            "2025-03-14T18:30",
            "2025-03-14 18:30",
            "2025-03-14",
        ] {
            let parsed = parse_timestamp(value);
            assert!(parsed.is_some(), "failed to parse {}", value);
            assert_eq!(parsed.unwrap().month(), 3);
        }
    }

    /// Expect an offset timestamp to keep the date and time it was written with
    #[test]
    fn offset_timestamp_keeps_wall_clock() {
        let parsed = parse_timestamp("2025-03-31T23:30:00-05:00").unwrap();

        assert_eq!(parsed.format("%Y-%m-%d %H:%M").to_string(), "2025-03-31 23:30");
    }

    /// Expect malformed timestamps to produce no month
    #[test]
    fn malformed_timestamp_has_no_month() {
        assert!(parse_timestamp("next friday").is_none());
        assert!(parse_timestamp("2025-13-01").is_none());
        assert!(parse_timestamp("").is_none());
    }

    /// Expect the month input value to round trip through YearMonth
    #[test]
    fn year_month_parses_month_input() {
        let month = YearMonth::parse("2025-03").unwrap();

        assert_eq!(month, YearMonth { year: 2025, month: 3 });
        assert_eq!(month.to_string(), "2025-03");
        assert!(YearMonth::parse("2025-00").is_none());
        assert!(YearMonth::parse("March").is_none());
    }

    /// Expect a complete draft to validate
    #[test]
    fn valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    /// Expect titles outside the allowed length to be rejected
    #[test]
    fn rejects_title_length() {
        let mut short = draft();
        short.title = " ab ".to_string();
        let mut long = draft();
        long.title = "x".repeat(TITLE_MAX_LEN + 1);

        assert!(matches!(
            short.validate(),
            Err(ValidationError::TitleLength { .. })
        ));
        assert!(matches!(
            long.validate(),
            Err(ValidationError::TitleLength { .. })
        ));
    }

    /// Expect missing location and unparseable dates to be rejected
    #[test]
    fn rejects_missing_fields() {
        let mut no_location = draft();
        no_location.latitude = None;
        let mut bad_date = draft();
        bad_date.starts_at = "soon".to_string();

        assert!(matches!(
            no_location.validate(),
            Err(ValidationError::Required("location"))
        ));
        assert!(matches!(
            bad_date.validate(),
            Err(ValidationError::InvalidDate(_))
        ));
    }

    /// Expect duplicate custom tag ids to be rejected
    #[test]
    fn rejects_duplicate_custom_tag_ids() {
        let mut draft = draft();
        let tag = Tag::Custom(CustomTag {
            id: "rust".to_string(),
            name: "Rust".to_string(),
            color: None,
        });
        draft.tags.push(tag.clone());
        draft.tags.push(tag);

        assert!(matches!(
            draft.validate(),
            Err(ValidationError::DuplicateTag(id)) if id == "rust"
        ));
    }

    /// Expect toggling a fixed tag twice to leave the tag list unchanged
    #[test]
    fn toggle_fixed_tag_adds_and_removes() {
        let mut draft = draft();

        draft.toggle_fixed_tag(FixedTag::Concert);
        assert_eq!(draft.tags.len(), 2);
        draft.toggle_fixed_tag(FixedTag::Concert);
        assert_eq!(draft.tags, vec![Tag::Fixed(FixedTag::Meetup)]);
    }

    /// Expect the lifecycle and moderation axes to deserialize independently
    #[test]
    fn deserializes_backend_event() {
        let event: Event = serde_json::from_str(
            r#"{
                "id": "1",
                "title": "Tech Conference",
                "startsAt": "2025-03-14T09:00:00Z",
                "organizerName": "ACME",
                "status": "held",
                "moderationStatus": "pending",
                "location": {"latitude": 1.5, "longitude": 2.5, "address": "Hall A"},
                "tags": ["CONFERENCE"]
            }"#,
        )
        .unwrap();

        assert_eq!(event.status, LifecycleStatus::Held);
        assert_eq!(event.moderation_status, Some(ModerationStatus::Pending));
        assert!(event.is_stale_pending());
        assert_eq!(event.year_month(), YearMonth::new(2025, 3));
    }
}
