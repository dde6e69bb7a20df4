use dioxus_logger::tracing;

use crate::{
    client::{
        error::ApiError,
        service::{ApiClient, Auth, Method, Transport},
    },
    model::{
        api::{FriendRequestDto, FriendRespondDto},
        friend::{Friend, FriendRequest, FriendResponse},
    },
};

/// Friend links and friend requests under `/users/friends`.
pub struct FriendService<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> FriendService<'a, T> {
    pub fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn friends(&self) -> Result<Vec<Friend>, ApiError> {
        self.client.get_json("/users/friends", Auth::Required).await
    }

    pub async fn incoming(&self) -> Result<Vec<FriendRequest>, ApiError> {
        self.client
            .get_json("/users/friends/incoming", Auth::Required)
            .await
    }

    pub async fn send_request(&self, user_id: &str) -> Result<(), ApiError> {
        let body = FriendRequestDto {
            user_id: user_id.to_string(),
        };

        self.client
            .send_json_empty(Method::Post, "/users/friends/request", &body, Auth::Required)
            .await?;
        tracing::debug!(user_id = %user_id, "Friend request sent");

        Ok(())
    }

    /// Accepts or declines an incoming request.
    ///
    /// The request only turns into a friend link once the backend accepted the answer, callers
    /// update their [`FriendBook`](crate::model::friend::FriendBook) afterwards.
    pub async fn respond(
        &self,
        request_id: &str,
        response: FriendResponse,
    ) -> Result<(), ApiError> {
        let body = FriendRespondDto {
            request_id: request_id.to_string(),
            response,
        };

        self.client
            .send_json_empty(Method::Put, "/users/friends/respond", &body, Auth::Required)
            .await
    }

    pub async fn remove(&self, friend_id: &str) -> Result<(), ApiError> {
        self.client
            .send_empty(
                Method::Delete,
                &format!("/users/friends/{}", urlencoding::encode(friend_id)),
                Auth::Required,
            )
            .await
    }
}
