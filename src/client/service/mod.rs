//! Backend-facing service modules.
//!
//! Each service is a thin wrapper around [`ApiClient`] for one resource (auth, users, friends,
//! events, favorites, geocoding). The client attaches the bearer token held by the explicit
//! [`Session`], turns any non-2xx answer into [`ApiError::Status`] carrying the backend's message,
//! and decodes JSON bodies into view-models. Failures are returned immediately: there are no
//! retries and no backoff, the component that issued the call decides what to show.
//!
//! Transport is abstracted behind [`Transport`] so the same services run on top of the browser
//! `fetch` API (`reqwasm`) in the web build and on `reqwest` elsewhere, including the tests.

pub mod auth;
pub mod event;
pub mod favorite;
pub mod friend;
pub mod geocoding;
pub mod session;
pub mod transport;
pub mod user;

#[cfg(test)]
mod tests;

use std::{fmt, future::Future, time::Duration};

use dioxus_logger::tracing;
use futures::future::{select, Either};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    client::{config::Config, error::ApiError},
    model::api::ErrorDto,
};

pub use auth::AuthService;
pub use event::EventService;
pub use favorite::FavoriteService;
pub use friend::FriendService;
pub use geocoding::GeocodingService;
pub use session::Session;
pub use transport::{HttpTransport, Transport};
pub use user::UserService;

/// Deadline for the initial profile load.
pub const PROFILE_LOAD_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        })
    }
}

/// File picked by the user for an avatar or event image.
#[derive(Clone, Debug, PartialEq)]
pub struct FileUpload {
    /// Multipart field name expected by the backend.
    pub field: &'static str,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(String),
    File(FileUpload),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    pub body: RequestBody,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<R: DeserializeOwned>(&self) -> Result<R, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Error for a non-2xx response, preferring the backend's `ErrorDto` message.
    pub fn into_error(self) -> ApiError {
        let message = match serde_json::from_str::<ErrorDto>(&self.body) {
            Ok(error_dto) => error_dto.error,
            Err(_) if self.body.trim().is_empty() => "Unknown error".to_string(),
            Err(_) => self.body,
        };

        ApiError::Status {
            status: self.status,
            message,
        }
    }
}

/// Whether a call carries the session token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Auth {
    /// Fails with [`ApiError::Unauthenticated`] when logged out.
    Required,
    /// Attaches the token when there is one.
    Optional,
    /// Never attaches the token, used for login and third-party hosts.
    Anonymous,
}

/// HTTP client shared by every service through the Dioxus context.
#[derive(Clone)]
pub struct ApiClient<T = HttpTransport> {
    config: Config,
    session: Session,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: Config, session: Session, transport: T) -> Self {
        Self {
            config,
            session,
            transport,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Sends a request to an absolute URL and checks the status.
    pub async fn send(
        &self,
        method: Method,
        url: String,
        body: RequestBody,
        auth: Auth,
    ) -> Result<ApiResponse, ApiError> {
        let bearer = match auth {
            Auth::Required => Some(self.session.token().ok_or(ApiError::Unauthenticated)?),
            Auth::Optional => self.session.token(),
            Auth::Anonymous => None,
        };

        tracing::debug!(method = %method, url = %url, "Sending request");

        let response = self
            .transport
            .send(ApiRequest {
                method,
                url: url.clone(),
                bearer,
                body,
            })
            .await
            .inspect_err(|err| tracing::warn!(method = %method, url = %url, "{}", err))?;

        if !response.is_success() {
            let err = response.into_error();
            tracing::warn!(method = %method, url = %url, "{}", err);

            return Err(err);
        }

        Ok(response)
    }

    /// `GET` of a backend path returning JSON.
    pub(crate) async fn get_json<R: DeserializeOwned>(
        &self,
        path: &str,
        auth: Auth,
    ) -> Result<R, ApiError> {
        self.send(Method::Get, self.config.api(path), RequestBody::Empty, auth)
            .await?
            .json()
    }

    /// Sends a JSON body to a backend path and decodes the JSON answer.
    pub(crate) async fn send_json<B: Serialize, R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        auth: Auth,
    ) -> Result<R, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;

        self.send(method, self.config.api(path), RequestBody::Json(body), auth)
            .await?
            .json()
    }

    /// Sends a JSON body to a backend path whose answer body is irrelevant.
    pub(crate) async fn send_json_empty<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        auth: Auth,
    ) -> Result<(), ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;

        self.send(method, self.config.api(path), RequestBody::Json(body), auth)
            .await
            .map(|_| ())
    }

    /// Calls a backend path whose answer body is irrelevant.
    pub(crate) async fn send_empty(
        &self,
        method: Method,
        path: &str,
        auth: Auth,
    ) -> Result<(), ApiError> {
        self.send(method, self.config.api(path), RequestBody::Empty, auth)
            .await
            .map(|_| ())
    }
}

/// Fails with [`ApiError::Timeout`] when `future` does not finish within `duration`.
///
/// The inner future is dropped on timeout, which cancels the underlying request.
pub async fn with_timeout<R>(
    duration: Duration,
    future: impl Future<Output = Result<R, ApiError>>,
) -> Result<R, ApiError> {
    let future = std::pin::pin!(future);
    let deadline = futures_timer::Delay::new(duration);

    match select(future, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => {
            tracing::warn!(millis = duration.as_millis() as u64, "Request timed out");
            Err(ApiError::Timeout(duration))
        }
    }
}
