use crate::{
    client::service::auth::validate_registration,
    model::{
        api::{LoginDto, RegisterDto},
        user::Role,
    },
};

use super::*;

fn credentials() -> LoginDto {
    LoginDto {
        email: "ada@example.com".to_string(),
        password: "correct horse".to_string(),
    }
}

fn account() -> RegisterDto {
    RegisterDto {
        username: "ada".to_string(),
        email: "ada@example.com".to_string(),
        password: "correct horse".to_string(),
        role: Role::Participant,
    }
}

/// Expect a successful login to store the returned token in the session
#[tokio::test]
async fn login_starts_session() {
    let test = TestBuilder::new()
        .with_login_endpoint("ada@example.com")
        .build()
        .await;
    let client = client_for(&test, None);
    let auth = AuthService::new(&client);

    auth.login(&credentials()).await.unwrap();

    assert!(auth.is_authenticated());
    assert_eq!(client.session().token().as_deref(), Some(TEST_TOKEN));
    test.assert_mocks();
}

/// Expect rejected credentials to surface the backend message and leave the session empty
#[tokio::test]
async fn login_rejected() {
    let test = TestBuilder::new()
        .with_error_endpoint("POST", "/auth/login", 401, "Invalid credentials")
        .build()
        .await;
    let client = client_for(&test, None);
    let auth = AuthService::new(&client);

    let result = auth.login(&credentials()).await;

    assert!(matches!(result, Err(ApiError::Status { status: 401, .. })));
    assert!(!auth.is_authenticated());
}

/// Expect registration to log the new account in
#[tokio::test]
async fn register_starts_session() {
    let test = TestBuilder::new()
        .with_endpoint(
            "POST",
            "/auth/register",
            201,
            json!({ "accessToken": TEST_TOKEN }),
        )
        .build()
        .await;
    let client = client_for(&test, None);

    AuthService::new(&client).register(&account()).await.unwrap();

    assert_eq!(client.session().token().as_deref(), Some(TEST_TOKEN));
}

/// Expect logout to drop the token
#[tokio::test]
async fn logout_clears_session() {
    let test = TestBuilder::new().build().await;
    let client = logged_in(&test);
    let auth = AuthService::new(&client);

    auth.logout();

    assert!(!auth.is_authenticated());
}

/// Expect the registration form rules to be enforced in order
#[test]
fn registration_validation() {
    assert!(validate_registration(&account(), "correct horse").is_ok());

    let mut bad_email = account();
    bad_email.email = "ada.example.com".to_string();
    assert!(matches!(
        validate_registration(&bad_email, "correct horse"),
        Err(crate::client::error::ValidationError::Email(_))
    ));

    let mut short = account();
    short.password = "short".to_string();
    assert!(matches!(
        validate_registration(&short, "short"),
        Err(crate::client::error::ValidationError::PasswordLength(8))
    ));

    assert!(matches!(
        validate_registration(&account(), "something else"),
        Err(crate::client::error::ValidationError::PasswordMismatch)
    ));
}
