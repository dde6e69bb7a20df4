use meetmap::{
    client::{
        access::require_role,
        error::{AccessError, ApiError},
        routes::profile::load_profile,
        service::{with_timeout, AuthService, UserService, PROFILE_LOAD_TIMEOUT},
    },
    model::{api::LoginDto, user::Role},
};
use meetmap_test_utils::{constant::TEST_ORGANIZER_ID, prelude::*};
use serde_json::json;

use crate::client_for;

fn profile_backend() -> TestBuilder {
    TestBuilder::new()
        .with_user_info_endpoint(user::organizer_json("Berlin"))
        .with_authorized_endpoint(
            "GET",
            "/users/friends",
            json!([user::friend_json("friend-1", "Grace")]),
            1,
        )
        .with_authorized_endpoint(
            "GET",
            "/users/friends/incoming",
            json!([user::friend_request_json("request-1", "user-7")]),
            1,
        )
        .with_authorized_endpoint(
            "GET",
            "/users/events",
            json!([event::event_json("1", "upcoming", &[])]),
            1,
        )
        .with_authorized_endpoint(
            "GET",
            "/me/favorites",
            json!([event::event_json("2", "held", &["MEETUP"])]),
            1,
        )
}

/// Expect a login to unlock the account and the organizer routes
#[tokio::test]
async fn login_then_fetch_account() {
    let test = TestBuilder::new()
        .with_login_endpoint("organizer@example.com")
        .with_user_info_endpoint(user::organizer_json("Berlin"))
        .build()
        .await;
    let client = client_for(&test, None);

    AuthService::new(&client)
        .login(&LoginDto {
            email: "organizer@example.com".to_string(),
            password: "correct horse".to_string(),
        })
        .await
        .unwrap();
    assert!(client.session().is_authenticated());

    let user = UserService::new(&client).get_info().await.unwrap();

    assert_eq!(user.profile().id, TEST_ORGANIZER_ID);
    assert!(require_role(Some(&user), Role::Organizer).is_ok());
    assert!(matches!(
        require_role(Some(&user), Role::Moderator),
        Err(AccessError::Forbidden { required: Role::Moderator })
    ));

    test.assert_mocks();
}

/// Expect every profile section to be loaded within the profile deadline
#[tokio::test]
async fn loads_complete_profile() {
    let test = profile_backend()
        .with_authorized_endpoint(
            "GET",
            "/me/event-invitations",
            json!([{
                "id": "invite-1",
                "event": event::event_json("3", "upcoming", &[]),
                "invitedBy": user::friend_json("friend-1", "Grace")
            }]),
            1,
        )
        .build()
        .await;
    let client = client_for(&test, Some(TEST_TOKEN));

    let profile = with_timeout(PROFILE_LOAD_TIMEOUT, load_profile(&client))
        .await
        .unwrap();

    assert_eq!(profile.user.role(), Role::Organizer);
    assert_eq!(profile.friends.friends[0].name, "Grace");
    assert_eq!(profile.friends.incoming[0].sender.id, "user-7");
    assert_eq!(profile.my_events[0].id, "1");
    assert_eq!(profile.favorites[0].id, "2");
    assert_eq!(profile.invitations[0].event.id, "3");

    test.assert_mocks();
}

/// Expect one failing section to fail the whole profile load
#[tokio::test]
async fn failing_section_fails_profile() {
    let test = profile_backend()
        .with_error_endpoint("GET", "/me/event-invitations", 500, "Invitations unavailable")
        .build()
        .await;
    let client = client_for(&test, Some(TEST_TOKEN));

    let result = load_profile(&client).await;

    assert!(matches!(
        result,
        Err(ApiError::Status { status: 500, ref message }) if message == "Invitations unavailable"
    ));
}

/// Expect the profile to be unreachable without a session
#[tokio::test]
async fn profile_requires_session() {
    let test = TestBuilder::new().build().await;
    let client = client_for(&test, None);

    let result = load_profile(&client).await;

    assert_eq!(result, Err(ApiError::Unauthenticated));
}
