use serde::{Deserialize, Serialize};

use crate::model::validation::ValidationError;

/// Account role, the discriminator of [`User`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Participant,
    Organizer,
    Moderator,
}

impl Role {
    pub const ALL: [Role; 3] = [Self::Participant, Self::Organizer, Self::Moderator];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Participant => "Participant",
            Self::Organizer => "Organizer",
            Self::Moderator => "Moderator",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|role| role.label().eq_ignore_ascii_case(value))
    }
}

/// Fields shared by every role.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl UserProfile {
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        match full.trim() {
            "" => self.username.clone(),
            name => name.to_string(),
        }
    }
}

/// Fields only organizers carry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizerDetails {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub activity_area: String,
    #[serde(default)]
    pub event_ids: Vec<String>,
}

/// Account as returned by `/users/getInfo`, discriminated by its `role` field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum User {
    Participant {
        #[serde(flatten)]
        profile: UserProfile,
    },
    Organizer {
        #[serde(flatten)]
        profile: UserProfile,
        #[serde(flatten)]
        details: OrganizerDetails,
    },
    Moderator {
        #[serde(flatten)]
        profile: UserProfile,
    },
}

impl User {
    pub fn role(&self) -> Role {
        match self {
            Self::Participant { .. } => Role::Participant,
            Self::Organizer { .. } => Role::Organizer,
            Self::Moderator { .. } => Role::Moderator,
        }
    }

    pub fn profile(&self) -> &UserProfile {
        match self {
            Self::Participant { profile }
            | Self::Organizer { profile, .. }
            | Self::Moderator { profile } => profile,
        }
    }

    pub fn profile_mut(&mut self) -> &mut UserProfile {
        match self {
            Self::Participant { profile }
            | Self::Organizer { profile, .. }
            | Self::Moderator { profile } => profile,
        }
    }

    pub fn organizer_details(&self) -> Option<&OrganizerDetails> {
        match self {
            Self::Organizer { details, .. } => Some(details),
            _ => None,
        }
    }

    pub fn organizer_details_mut(&mut self) -> Option<&mut OrganizerDetails> {
        match self {
            Self::Organizer { details, .. } => Some(details),
            _ => None,
        }
    }

    /// Returns the same account with `role`.
    ///
    /// Role-specific fields are re-initialized whenever the role actually changes, so switching
    /// to organizer always starts from empty organizer details.
    pub fn with_role(self, role: Role) -> Self {
        if self.role() == role {
            return self;
        }

        let profile = match self {
            Self::Participant { profile }
            | Self::Organizer { profile, .. }
            | Self::Moderator { profile } => profile,
        };

        match role {
            Role::Participant => Self::Participant { profile },
            Role::Organizer => Self::Organizer {
                profile,
                details: OrganizerDetails::default(),
            },
            Role::Moderator => Self::Moderator { profile },
        }
    }

    /// Checks the fields required by the account's role.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let profile = self.profile();
        if profile.username.trim().is_empty() {
            return Err(ValidationError::Required("username"));
        }

        if let Self::Organizer { details, .. } = self {
            if details.activity_area.trim().is_empty() {
                return Err(ValidationError::Required("activity area"));
            }
        }

        Ok(())
    }
}
