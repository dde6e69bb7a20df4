use crate::{
    client::{
        error::ApiError,
        service::{ApiClient, Auth, Method, RequestBody, Transport},
    },
    model::{
        api::{FavoriteDto, InvitationDto},
        event::Event,
    },
};

/// Favorites and invitations of the logged-in user under `/me`.
pub struct FavoriteService<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> FavoriteService<'a, T> {
    pub fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn favorites(&self) -> Result<Vec<Event>, ApiError> {
        self.client.get_json("/me/favorites", Auth::Required).await
    }

    /// Flips the favorite state of an event and returns the new state.
    pub async fn toggle(&self, event_id: &str) -> Result<bool, ApiError> {
        let favorite: FavoriteDto = self
            .client
            .send(
                Method::Post,
                self.client
                    .config()
                    .api(&format!("/me/favorites/{}", urlencoding::encode(event_id))),
                RequestBody::Empty,
                Auth::Required,
            )
            .await?
            .json()?;

        Ok(favorite.favorite)
    }

    pub async fn invitations(&self) -> Result<Vec<InvitationDto>, ApiError> {
        self.client
            .get_json("/me/event-invitations", Auth::Required)
            .await
    }
}
