use dioxus_logger::tracing;

use crate::{
    client::{
        error::{ApiError, Error},
        service::{ApiClient, Auth, FileUpload, Method, RequestBody, Transport},
    },
    model::{
        api::{InviteDto, ModerationUpdateDto, RegistrationStatusDto, UploadDto},
        comment::{Comment, NewComment},
        event::{Event, EventDraft, ModerationStatus},
    },
};

fn event_path(event_id: &str, suffix: &str) -> String {
    format!("/events/{}{}", urlencoding::encode(event_id), suffix)
}

/// Event listing, management, moderation and registration under `/events`.
pub struct EventService<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> EventService<'a, T> {
    pub fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// Public listing shown on the home page.
    pub async fn list(&self) -> Result<Vec<Event>, ApiError> {
        self.client.get_json("/events", Auth::Optional).await
    }

    pub async fn get(&self, event_id: &str) -> Result<Event, ApiError> {
        self.client
            .get_json(&event_path(event_id, ""), Auth::Optional)
            .await
    }

    /// Validates the draft and creates the event.
    pub async fn create(&self, draft: &EventDraft) -> Result<Event, Error> {
        let payload = draft.to_payload()?;
        let event: Event = self
            .client
            .send_json(Method::Post, "/events", &payload, Auth::Required)
            .await?;

        tracing::info!(event_id = %event.id, "Created event");

        Ok(event)
    }

    /// Validates the draft and replaces the event's editable fields.
    pub async fn update(&self, event_id: &str, draft: &EventDraft) -> Result<Event, Error> {
        let payload = draft.to_payload()?;

        Ok(self
            .client
            .send_json(
                Method::Put,
                &event_path(event_id, ""),
                &payload,
                Auth::Required,
            )
            .await?)
    }

    pub async fn delete(&self, event_id: &str) -> Result<(), ApiError> {
        self.client
            .send_empty(Method::Delete, &event_path(event_id, ""), Auth::Required)
            .await?;
        tracing::info!(event_id = %event_id, "Deleted event");

        Ok(())
    }

    /// Uploads a cover image and returns its URL.
    pub async fn upload_image(&self, mut file: FileUpload) -> Result<String, ApiError> {
        file.field = "image";
        let upload: UploadDto = self
            .client
            .send(
                Method::Post,
                self.client.config().api("/events/uploadImage"),
                RequestBody::File(file),
                Auth::Required,
            )
            .await?
            .json()?;

        Ok(upload.url)
    }

    pub async fn by_moderation_status(
        &self,
        status: ModerationStatus,
    ) -> Result<Vec<Event>, ApiError> {
        self.client
            .get_json(
                &format!("/events/moderation/{}", status.as_path()),
                Auth::Required,
            )
            .await
    }

    pub async fn by_organizer(&self, organizer_id: &str) -> Result<Vec<Event>, ApiError> {
        self.client
            .get_json(
                &format!("/events/organizer/{}", urlencoding::encode(organizer_id)),
                Auth::Required,
            )
            .await
    }

    /// Records a moderator's decision and returns the updated event.
    pub async fn set_moderation_status(
        &self,
        event_id: &str,
        status: ModerationStatus,
    ) -> Result<Event, ApiError> {
        let event: Event = self
            .client
            .send_json(
                Method::Put,
                &event_path(event_id, ""),
                &ModerationUpdateDto {
                    moderation_status: status,
                },
                Auth::Required,
            )
            .await?;

        tracing::info!(event_id = %event_id, status = ?status, "Moderated event");

        Ok(event)
    }

    pub async fn sign_up(&self, event_id: &str) -> Result<(), ApiError> {
        self.client
            .send_empty(
                Method::Post,
                &event_path(event_id, "/signup"),
                Auth::Required,
            )
            .await
    }

    pub async fn cancel_registration(&self, event_id: &str) -> Result<(), ApiError> {
        self.client
            .send_empty(
                Method::Post,
                &event_path(event_id, "/cancel"),
                Auth::Required,
            )
            .await
    }

    pub async fn is_registered(&self, event_id: &str) -> Result<bool, ApiError> {
        let status: RegistrationStatusDto = self
            .client
            .get_json(&event_path(event_id, "/check-registration"), Auth::Required)
            .await?;

        Ok(status.registered)
    }

    pub async fn comments(&self, event_id: &str) -> Result<Vec<Comment>, ApiError> {
        self.client
            .get_json(&event_path(event_id, "/comments"), Auth::Optional)
            .await
    }

    /// Validates and posts a comment, returning it as stored by the backend.
    pub async fn add_comment(&self, event_id: &str, comment: &NewComment) -> Result<Comment, Error> {
        comment.validate()?;
        let body = NewComment {
            text: comment.text.trim().to_string(),
            rating: comment.rating,
        };

        Ok(self
            .client
            .send_json(
                Method::Post,
                &event_path(event_id, "/comments"),
                &body,
                Auth::Required,
            )
            .await?)
    }

    /// Invites friends to an event. An empty selection sends nothing.
    pub async fn invite(&self, event_id: &str, friend_ids: &[String]) -> Result<(), ApiError> {
        if friend_ids.is_empty() {
            return Ok(());
        }

        self.client
            .send_json_empty(
                Method::Post,
                &event_path(event_id, "/invite"),
                &InviteDto {
                    friend_ids: friend_ids.to_vec(),
                },
                Auth::Required,
            )
            .await
    }
}
