//! Event category tags.
//!
//! Tags come in two kinds: members of the fixed [`FixedTag`] vocabulary, each with an assigned
//! display color, and free-form [`CustomTag`] records created by organizers. On the wire a fixed
//! tag is its uppercase name (`"CONFERENCE"`) while a custom tag is an object; [`Tag`] folds both
//! into one tagged variant.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::model::validation::ValidationError;

/// Fixed event category vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FixedTag {
    Conference,
    Workshop,
    Concert,
    Exhibition,
    Festival,
    Sport,
    Meetup,
    Theatre,
    Education,
    Charity,
}

impl FixedTag {
    pub const ALL: [FixedTag; 10] = [
        FixedTag::Conference,
        FixedTag::Workshop,
        FixedTag::Concert,
        FixedTag::Exhibition,
        FixedTag::Festival,
        FixedTag::Sport,
        FixedTag::Meetup,
        FixedTag::Theatre,
        FixedTag::Education,
        FixedTag::Charity,
    ];

    /// Uppercase identifier used by the backend.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Conference => "CONFERENCE",
            Self::Workshop => "WORKSHOP",
            Self::Concert => "CONCERT",
            Self::Exhibition => "EXHIBITION",
            Self::Festival => "FESTIVAL",
            Self::Sport => "SPORT",
            Self::Meetup => "MEETUP",
            Self::Theatre => "THEATRE",
            Self::Education => "EDUCATION",
            Self::Charity => "CHARITY",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Conference => "Conference",
            Self::Workshop => "Workshop",
            Self::Concert => "Concert",
            Self::Exhibition => "Exhibition",
            Self::Festival => "Festival",
            Self::Sport => "Sport",
            Self::Meetup => "Meetup",
            Self::Theatre => "Theatre",
            Self::Education => "Education",
            Self::Charity => "Charity",
        }
    }

    /// Display color as a CSS hex value.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Conference => "#1e88e5",
            Self::Workshop => "#43a047",
            Self::Concert => "#8e24aa",
            Self::Exhibition => "#f4511e",
            Self::Festival => "#fdd835",
            Self::Sport => "#e53935",
            Self::Meetup => "#00acc1",
            Self::Theatre => "#6d4c41",
            Self::Education => "#3949ab",
            Self::Charity => "#d81b60",
        }
    }

    /// Case-insensitive lookup by wire name.
    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.wire_name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Organizer-defined tag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CustomTag {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Fallback color for custom tags without one.
pub const DEFAULT_CUSTOM_TAG_COLOR: &str = "#757575";

#[derive(Clone, Debug, PartialEq)]
pub enum Tag {
    Fixed(FixedTag),
    Custom(CustomTag),
}

impl Tag {
    pub fn label(&self) -> &str {
        match self {
            Self::Fixed(tag) => tag.label(),
            Self::Custom(tag) => &tag.name,
        }
    }

    pub fn color(&self) -> &str {
        match self {
            Self::Fixed(tag) => tag.color(),
            Self::Custom(tag) => tag.color.as_deref().unwrap_or(DEFAULT_CUSTOM_TAG_COLOR),
        }
    }

    /// Filter equality between tags.
    ///
    /// Fixed tags match by identity, custom tags match when their ids are equal or their names are
    /// equal ignoring case. A fixed tag never matches a custom one, even with the same name.
    pub fn matches(&self, other: &Tag) -> bool {
        match (self, other) {
            (Self::Fixed(a), Self::Fixed(b)) => a == b,
            (Self::Custom(a), Self::Custom(b)) => {
                a.id == b.id || a.name.to_lowercase() == b.name.to_lowercase()
            }
            _ => false,
        }
    }
}

impl From<FixedTag> for Tag {
    fn from(tag: FixedTag) -> Self {
        Self::Fixed(tag)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireTag {
    Name(String),
    Custom(CustomTag),
}

impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Fixed(tag) => serializer.serialize_str(tag.wire_name()),
            Self::Custom(tag) => tag.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match WireTag::deserialize(deserializer)? {
            WireTag::Name(name) => match FixedTag::from_wire_name(&name) {
                Some(tag) => Self::Fixed(tag),
                // Unknown names from older backends are kept as custom tags
                None => Self::Custom(CustomTag {
                    id: name.clone(),
                    name,
                    color: None,
                }),
            },
            WireTag::Custom(tag) => Self::Custom(tag),
        })
    }
}

/// Lowercase, dash-separated form of a tag name used as a custom tag id.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.trim().chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }

    slug.trim_end_matches('-').to_string()
}

/// Adds a custom tag to an event's tag list.
///
/// The new tag receives an id derived from its name that is unique within `tags`. A tag that
/// already matches by name is not added twice; the existing one is returned instead.
pub fn push_custom_tag(
    tags: &mut Vec<Tag>,
    name: &str,
    color: Option<String>,
) -> Result<CustomTag, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::Required("tag name"));
    }

    let candidate = Tag::Custom(CustomTag {
        id: String::new(),
        name: name.to_string(),
        color: None,
    });
    if let Some(Tag::Custom(existing)) = tags.iter().find(|tag| tag.matches(&candidate)) {
        return Ok(existing.clone());
    }

    let base = match slugify(name) {
        slug if slug.is_empty() => "tag".to_string(),
        slug => slug,
    };
    let taken = |id: &str| {
        tags.iter()
            .any(|tag| matches!(tag, Tag::Custom(custom) if custom.id == id))
    };

    let mut id = base.clone();
    let mut suffix = 2;
    while taken(&id) {
        id = format!("{}-{}", base, suffix);
        suffix += 1;
    }

    let tag = CustomTag {
        id,
        name: name.to_string(),
        color,
    };
    tags.push(Tag::Custom(tag.clone()));

    Ok(tag)
}
