use chrono::NaiveDateTime;
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::model::{event::parse_timestamp, validation::ValidationError};

pub const MAX_RATING: u8 = 5;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub author_id: String,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub rating: u8,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: NaiveDateTime,
}

/// Accepts every timestamp format [`parse_timestamp`] knows.
fn deserialize_timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
    let value = String::deserialize(deserializer)?;
    parse_timestamp(&value)
        .ok_or_else(|| de::Error::custom(format!("unsupported timestamp {:?}", value)))
}

/// Body of `POST /events/{id}/comments`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewComment {
    pub text: String,
    pub rating: u8,
}

impl NewComment {
    /// A comment needs text, a rating, or both.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.rating > MAX_RATING {
            return Err(ValidationError::Rating(self.rating));
        }
        if self.text.trim().is_empty() && self.rating == 0 {
            return Err(ValidationError::EmptyComment);
        }

        Ok(())
    }
}

/// Mean of the non-zero ratings, `None` when nobody rated.
pub fn average_rating(comments: &[Comment]) -> Option<f32> {
    let ratings: Vec<f32> = comments
        .iter()
        .filter(|c| c.rating > 0)
        .map(|c| c.rating as f32)
        .collect();

    if ratings.is_empty() {
        None
    } else {
        Some(ratings.iter().sum::<f32>() / ratings.len() as f32)
    }
}
