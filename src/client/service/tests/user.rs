use crate::model::user::{Role, User};

use super::*;

/// Expect the role-tagged account to be decoded
#[tokio::test]
async fn get_info_decodes_role() {
    let test = TestBuilder::new()
        .with_user_info_endpoint(fixtures::user::organizer_json("Berlin"))
        .build()
        .await;
    let client = logged_in(&test);

    let user = UserService::new(&client).get_info().await.unwrap();

    assert_eq!(user.role(), Role::Organizer);
    assert_eq!(user.organizer_details().unwrap().activity_area, "Berlin");
    test.assert_mocks();
}

/// Expect switching to organizer without an activity area to be rejected locally
#[tokio::test]
async fn edit_info_validates_role_fields() {
    let test = TestBuilder::new()
        .with_authorized_endpoint("PUT", "/users/editInfo", json!({}), 0)
        .build()
        .await;
    let client = logged_in(&test);
    let user: User = serde_json::from_value(fixtures::user::participant_json()).unwrap();

    let result = UserService::new(&client)
        .edit_info(&user.with_role(Role::Organizer))
        .await;

    assert!(matches!(result, Err(Error::ValidationError(_))));
    test.assert_mocks();
}

/// Expect a valid edit to send the role discriminator
#[tokio::test]
async fn edit_info_sends_role() {
    let test = TestBuilder::new()
        .with_json_endpoint(
            "PUT",
            "/users/editInfo",
            json!({ "role": "moderator", "username": "participant" }),
            json!({ "role": "moderator", "id": "user-1", "username": "participant" }),
        )
        .build()
        .await;
    let client = logged_in(&test);
    let user: User = serde_json::from_value(fixtures::user::participant_json()).unwrap();

    let saved = UserService::new(&client)
        .edit_info(&user.with_role(Role::Moderator))
        .await
        .unwrap();

    assert_eq!(saved.role(), Role::Moderator);
    test.assert_mocks();
}

/// Expect avatars to be uploaded as multipart
#[tokio::test]
async fn upload_avatar() {
    let test = TestBuilder::new()
        .with_upload_endpoint("/users/uploadAvatar", "https://img.example.com/me.jpg")
        .build()
        .await;
    let client = logged_in(&test);

    let url = UserService::new(&client)
        .upload_avatar(FileUpload {
            field: "file",
            file_name: "me.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            bytes: vec![0xff, 0xd8, 0xff],
        })
        .await
        .unwrap();

    assert_eq!(url, "https://img.example.com/me.jpg");
    test.assert_mocks();
}

/// Expect the user's registered events to be listed
#[tokio::test]
async fn my_events() {
    let test = TestBuilder::new()
        .with_authorized_endpoint(
            "GET",
            "/users/events",
            json!([fixtures::event::event_json("1", "upcoming", &[])]),
            1,
        )
        .build()
        .await;
    let client = logged_in(&test);

    let events = UserService::new(&client).my_events().await.unwrap();

    assert_eq!(events.len(), 1);
    test.assert_mocks();
}

/// Expect user search to encode the query
#[tokio::test]
async fn search_users() {
    let mut test = TestBuilder::new().build().await;
    let mock = test
        .server()
        .mock("GET", "/users/search")
        .match_query(mockito::Matcher::UrlEncoded(
            "q".to_string(),
            "ada lovelace".to_string(),
        ))
        .with_status(200)
        .with_body(json!([{ "id": "u2", "username": "ada" }]).to_string())
        .create_async()
        .await;
    let client = logged_in(&test);

    let results = UserService::new(&client)
        .search("ada lovelace")
        .await
        .unwrap();

    assert_eq!(results[0].username, "ada");
    mock.assert_async().await;
}
