use serde::{Deserialize, Serialize};

use crate::model::{event::ModerationStatus, friend::FriendResponse, user::Role};

/// The response body the backend sends alongside a failed request
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    #[serde(alias = "message")]
    pub error: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDto {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Returned by `/auth/login` and `/auth/register`.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthDto {
    #[serde(alias = "accessToken", alias = "access_token")]
    pub token: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendRequestDto {
    pub user_id: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendRespondDto {
    pub request_id: String,
    pub response: FriendResponse,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationStatusDto {
    pub registered: bool,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationUpdateDto {
    pub moderation_status: ModerationStatus,
}

/// Returned by the image and avatar upload endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct UploadDto {
    #[serde(alias = "imageUrl", alias = "avatarUrl")]
    pub url: String,
}

/// `/me/favorites/{id}` responds with the new favorite state.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteDto {
    pub favorite: bool,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteDto {
    pub friend_ids: Vec<String>,
}

/// An event a friend invited the current user to.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationDto {
    pub id: String,
    pub event: crate::model::event::Event,
    pub invited_by: crate::model::friend::Friend,
}

/// Single hit of the user search endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSearchResult {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Geocoding hit; the provider sends coordinates as strings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GeocodeResult {
    pub lat: String,
    pub lon: String,
    pub display_name: String,
}

impl GeocodeResult {
    /// Parsed `(latitude, longitude)`, `None` when the provider sent garbage.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.lat.trim().parse().ok()?, self.lon.trim().parse().ok()?))
    }
}
