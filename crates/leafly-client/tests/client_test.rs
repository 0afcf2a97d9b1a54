//! Integration tests for [`leafly_client::LeaflyClient`] against a mockito stand-in for the Leafly API.
//!
//! Covers: request shape (path, headers, JSON body), the three strain outcomes (error, none, some),
//! malformed bodies, and location searches degrading to an empty list.

use leafly_client::{Directory, LeaflyClient, LeaflyConfig, LeaflyError};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

const BLUE_DREAM: &str = r#"{
    "Name": "Blue Dream",
    "Category": "Hybrid",
    "Rating": 8,
    "Tags": [{"Name": "Happy"}],
    "NegativeEffects": [],
    "Symptoms": [{"Name": "Stress"}],
    "permalink": "http://x"
}"#;

fn client_for(server: &ServerGuard) -> LeaflyClient {
    let config = LeaflyConfig::new("test-id", "test-key").with_base_url(server.url());
    LeaflyClient::new(config).unwrap()
}

/// **Test: Strain search sends credentials and the rating-sorted first page, and formats the result.**
#[tokio::test]
async fn test_search_strains_request_and_format() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/strains")
        .match_header("app_id", "test-id")
        .match_header("app_key", "test-key")
        .match_body(Matcher::Json(json!({
            "search": "blue dream",
            "page": 0,
            "take": 5,
            "sort": "rating"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(r#"{{"Strains": [{}]}}"#, BLUE_DREAM))
        .create_async()
        .await;

    let strains = client_for(&server).search_strains("blue dream").await.unwrap();

    mock.assert_async().await;
    assert_eq!(
        strains,
        vec!["Blue Dream (Hybrid)\n     ⭐⭐⭐⭐\n👍 Happy\n🏥 Stress\nhttp://x".to_string()]
    );
}

/// **Test: A 200 with an empty `Strains` array is zero matches, not an error.**
#[tokio::test]
async fn test_search_strains_zero_matches() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/strains")
        .with_status(200)
        .with_body(r#"{"Strains": []}"#)
        .create_async()
        .await;

    let strains = client_for(&server).search_strains("nothing").await.unwrap();
    assert!(strains.is_empty());
}

/// **Test: At most five strains are returned even if the API sends more.**
#[tokio::test]
async fn test_search_strains_caps_at_five() {
    let mut server = Server::new_async().await;
    let entries = vec![BLUE_DREAM; 7].join(",");
    let _mock = server
        .mock("POST", "/strains")
        .with_status(200)
        .with_body(format!(r#"{{"Strains": [{}]}}"#, entries))
        .create_async()
        .await;

    let strains = client_for(&server).search_strains("blue").await.unwrap();
    assert_eq!(strains.len(), 5);
}

/// **Test: A non-200 status is reported as `LeaflyError::Status`.**
#[tokio::test]
async fn test_search_strains_non_200_is_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/strains")
        .with_status(503)
        .with_body("down for maintenance")
        .create_async()
        .await;

    let err = client_for(&server).search_strains("blue dream").await.unwrap_err();
    match err {
        LeaflyError::Status { status, body } => {
            assert_eq!(status.as_u16(), 503);
            assert_eq!(body, "down for maintenance");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

/// **Test: A 200 with a body that is not the expected JSON is a decode error.**
#[tokio::test]
async fn test_search_strains_malformed_body_is_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/strains")
        .with_status(200)
        .with_body("<html>oops</html>")
        .create_async()
        .await;

    let err = client_for(&server).search_strains("blue dream").await.unwrap_err();
    assert!(matches!(err, LeaflyError::Decode(_)));
}

/// **Test: Location search sends coordinates with the first page and formats stores.**
#[tokio::test]
async fn test_search_locations_request_and_format() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/locations")
        .match_header("app_id", "test-id")
        .match_header("app_key", "test-key")
        .match_body(Matcher::Json(json!({
            "page": 0,
            "take": 5,
            "latitude": 39.75,
            "longitude": -104.99
        })))
        .with_status(200)
        .with_body(
            r#"{"stores": [{
                "name": "Green Leaf",
                "locationLabel": "Denver, CO",
                "address": "1 Main St",
                "phone": "555-0100",
                "hours": "9am-9pm",
                "delivery": true,
                "storefront": false,
                "creditCards": false,
                "atm": true,
                "medical": false
            }]}"#,
        )
        .create_async()
        .await;

    let stores = client_for(&server).search_locations(39.75, -104.99).await;

    mock.assert_async().await;
    assert_eq!(
        stores,
        vec!["Green Leaf (🚚🏧)\nDenver, CO\n1 Main St\n555-0100\n9am-9pm".to_string()]
    );
}

/// **Test: Numeric feature flags still produce the store listing.**
#[tokio::test]
async fn test_search_locations_numeric_flags() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/locations")
        .with_status(200)
        .with_body(r#"{"stores": [{"name": "Corner Shop", "atm": 1, "medical": 0}]}"#)
        .create_async()
        .await;

    let stores = client_for(&server).search_locations(1.0, 2.0).await;
    assert_eq!(stores.len(), 1);
    assert!(stores[0].starts_with("Corner Shop (🏧)"), "{}", stores[0]);
}

/// **Test: Location search failures degrade to an empty list.**
#[tokio::test]
async fn test_search_locations_non_200_is_empty() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/locations")
        .with_status(500)
        .create_async()
        .await;

    let stores = client_for(&server).search_locations(0.0, 0.0).await;
    assert!(stores.is_empty());
}

/// **Test: A location response without `stores` means no stores.**
#[tokio::test]
async fn test_search_locations_missing_stores_key() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/locations")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let stores = client_for(&server).search_locations(1.0, 2.0).await;
    assert!(stores.is_empty());
}
