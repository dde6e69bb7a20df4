use dioxus_logger::tracing;

use crate::{
    client::{
        error::{ApiError, ValidationError},
        service::{ApiClient, Auth, Method, Transport},
    },
    model::api::{AuthDto, LoginDto, RegisterDto},
};

pub const PASSWORD_MIN_LEN: usize = 8;

/// Login, registration and logout against `/auth`.
pub struct AuthService<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> AuthService<'a, T> {
    pub fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// Exchanges credentials for a token and starts the session.
    pub async fn login(&self, credentials: &LoginDto) -> Result<(), ApiError> {
        let auth: AuthDto = self
            .client
            .send_json(Method::Post, "/auth/login", credentials, Auth::Anonymous)
            .await?;

        self.client.session().login(&auth.token);

        Ok(())
    }

    /// Creates an account and logs it in.
    pub async fn register(&self, account: &RegisterDto) -> Result<(), ApiError> {
        let auth: AuthDto = self
            .client
            .send_json(Method::Post, "/auth/register", account, Auth::Anonymous)
            .await?;

        tracing::info!(username = %account.username, "Registered account");
        self.client.session().login(&auth.token);

        Ok(())
    }

    pub fn logout(&self) {
        self.client.session().logout();
    }

    pub fn is_authenticated(&self) -> bool {
        self.client.session().is_authenticated()
    }
}

/// Checks the registration form before it is sent.
pub fn validate_registration(
    account: &RegisterDto,
    password_confirmation: &str,
) -> Result<(), ValidationError> {
    if account.username.trim().is_empty() {
        return Err(ValidationError::Required("username"));
    }
    let email = account.email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => {}
        _ => return Err(ValidationError::Email(email.to_string())),
    }
    if account.password.chars().count() < PASSWORD_MIN_LEN {
        return Err(ValidationError::PasswordLength(PASSWORD_MIN_LEN));
    }
    if account.password != password_confirmation {
        return Err(ValidationError::PasswordMismatch);
    }

    Ok(())
}
