use crate::{
    client::{
        error::{ApiError, Error},
        service::{ApiClient, Auth, FileUpload, Method, RequestBody, Transport},
    },
    model::{
        api::{UploadDto, UserSearchResult},
        event::Event,
        user::User,
    },
};

/// Account information of the logged-in user.
pub struct UserService<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> UserService<'a, T> {
    pub fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn get_info(&self) -> Result<User, ApiError> {
        self.client.get_json("/users/getInfo", Auth::Required).await
    }

    /// Saves profile changes after checking the role-required fields.
    pub async fn edit_info(&self, user: &User) -> Result<User, Error> {
        user.validate()?;

        Ok(self
            .client
            .send_json(Method::Put, "/users/editInfo", user, Auth::Required)
            .await?)
    }

    /// Uploads a new avatar and returns its URL.
    pub async fn upload_avatar(&self, mut file: FileUpload) -> Result<String, ApiError> {
        file.field = "avatar";
        let upload: UploadDto = self
            .client
            .send(
                Method::Post,
                self.client.config().api("/users/uploadAvatar"),
                RequestBody::File(file),
                Auth::Required,
            )
            .await?
            .json()?;

        Ok(upload.url)
    }

    /// Events the user signed up for.
    pub async fn my_events(&self) -> Result<Vec<Event>, ApiError> {
        self.client.get_json("/users/events", Auth::Required).await
    }

    /// Looks up accounts by name for friend requests.
    ///
    /// The token is only sent when the search endpoint lives on the backend itself.
    pub async fn search(&self, query: &str) -> Result<Vec<UserSearchResult>, ApiError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let config = self.client.config();
        let auth = if config.user_search_url.starts_with(&config.api_url) {
            Auth::Optional
        } else {
            Auth::Anonymous
        };
        let url = format!(
            "{}?q={}",
            config.user_search_url,
            urlencoding::encode(query)
        );

        self.client
            .send(Method::Get, url, RequestBody::Empty, auth)
            .await?
            .json()
    }
}
