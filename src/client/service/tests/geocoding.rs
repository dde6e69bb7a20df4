use super::*;

/// Expect the first hit with usable coordinates to be returned
#[tokio::test]
async fn locate_returns_first_valid_hit() {
    let test = TestBuilder::new()
        .with_geocoding_endpoint(
            "Alexanderplatz 1, Berlin",
            vec![
                fixtures::geocoding::geocode_json("not-a-number", "13.4", "Broken"),
                fixtures::geocoding::geocode_json("52.5219", "13.4132", "Alexanderplatz, Berlin"),
            ],
        )
        .build()
        .await;
    let client = logged_in(&test);

    let hit = GeocodingService::new(&client)
        .locate(" Alexanderplatz 1, Berlin ")
        .await
        .unwrap();

    assert_eq!(
        hit,
        Some((52.5219, 13.4132, "Alexanderplatz, Berlin".to_string()))
    );
    test.assert_mocks();
}

/// Expect no hits to resolve to None
#[tokio::test]
async fn locate_without_results() {
    let test = TestBuilder::new()
        .with_geocoding_endpoint("Nowhere", Vec::new())
        .build()
        .await;
    let client = client_for(&test, None);

    let hit = GeocodingService::new(&client).locate("Nowhere").await.unwrap();

    assert!(hit.is_none());
}

/// Expect a blank address not to reach the geocoder
#[tokio::test]
async fn blank_address_is_skipped() {
    let test = TestBuilder::new().build().await;
    let client = client_for(&test, None);

    let results = GeocodingService::new(&client).search("   ").await.unwrap();

    assert!(results.is_empty());
}
