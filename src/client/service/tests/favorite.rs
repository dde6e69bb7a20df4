use super::*;

/// Expect favorites to be listed for the logged-in user
#[tokio::test]
async fn lists_favorites() {
    let test = TestBuilder::new()
        .with_authorized_endpoint(
            "GET",
            "/me/favorites",
            json!([fixtures::event::event_json("5", "upcoming", &["CONCERT"])]),
            1,
        )
        .build()
        .await;
    let client = logged_in(&test);

    let favorites = FavoriteService::new(&client).favorites().await.unwrap();

    assert_eq!(favorites[0].id, "5");
    test.assert_mocks();
}

/// Expect toggling to report the new favorite state
#[tokio::test]
async fn toggle_returns_new_state() {
    let test = TestBuilder::new()
        .with_authorized_endpoint("POST", "/me/favorites/5", json!({ "favorite": true }), 1)
        .build()
        .await;
    let client = logged_in(&test);

    assert!(FavoriteService::new(&client).toggle("5").await.unwrap());
    test.assert_mocks();
}

/// Expect invitations to include the inviting friend and the event
#[tokio::test]
async fn lists_invitations() {
    let test = TestBuilder::new()
        .with_authorized_endpoint(
            "GET",
            "/me/event-invitations",
            json!([{
                "id": "inv-1",
                "event": fixtures::event::event_json("7", "upcoming", &[]),
                "invitedBy": fixtures::user::friend_json("f1", "Grace")
            }]),
            1,
        )
        .build()
        .await;
    let client = logged_in(&test);

    let invitations = FavoriteService::new(&client).invitations().await.unwrap();

    assert_eq!(invitations[0].event.id, "7");
    assert_eq!(invitations[0].invited_by.name, "Grace");
    test.assert_mocks();
}
