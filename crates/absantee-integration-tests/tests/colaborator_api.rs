//! Colaborator endpoints over a real socket.

use absantee_integration_tests::fixtures::{self, seed_colaborators};
use absantee_integration_tests::{ClientOptions, HarnessError, TestHost};
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn get_returns_seeded_colaborators() -> Result<(), HarnessError> {
    // Arrange
    let host = TestHost::start().await?;
    {
        let mut scope = host.services().create_scope();
        fixtures::reinitialize(scope.data()).await?;
    }
    let client = host.create_client(ClientOptions::no_redirects())?;

    // Act
    let response = client.get("/api/colaborator").await?;

    // Assert
    let items = response.expect_success()?.json_array()?;
    assert_eq!(items.len(), 3);

    let names: Vec<_> = items.iter().map(|c| c["name"].as_str().unwrap()).collect();
    let expected: Vec<_> = seed_colaborators().into_iter().map(|c| c.name).collect();
    assert_eq!(names, expected);

    host.shutdown().await
}

#[tokio::test]
async fn get_before_reset_returns_empty_array() -> Result<(), HarnessError> {
    let host = TestHost::start().await?;
    let client = host.create_client(ClientOptions::no_redirects())?;

    let response = client.get("/api/colaborator").await?.expect_success()?;

    assert!(response.json_array()?.is_empty());
    host.shutdown().await
}

#[tokio::test]
async fn post_adds_colaborator() -> Result<(), HarnessError> {
    // Arrange
    let host = TestHost::start().await?;
    let client = host.create_client(ClientOptions::no_redirects())?;
    let colaborator = json!({
        "Name": "John Doe",
        "Email": "john.doe@example.com",
        "Street": "adlkfjasdlkfs",
        "PostalCode": "4000-000"
    });

    // Act
    let response = client.post_json("/api/colaborator", &colaborator).await?;

    // Assert
    let response = response.expect_status(StatusCode::CREATED)?;
    let body: serde_json::Value = response.json()?;
    assert_eq!(
        body,
        json!({
            "name": "John Doe",
            "email": "john.doe@example.com",
            "street": "adlkfjasdlkfs",
            "postalCode": "4000-000"
        })
    );

    let listed = client.get("/api/colaborator").await?.json_array()?;
    assert_eq!(listed.len(), 1);

    host.shutdown().await
}

#[tokio::test]
async fn post_after_reset_is_visible_to_scope() -> Result<(), HarnessError> {
    let host = TestHost::start().await?;
    let mut scope = host.services().create_scope();
    fixtures::reinitialize(scope.data()).await?;

    let client = host.create_client(ClientOptions::default())?;
    client
        .post_json(
            "/api/colaborator",
            &json!({
                "name": "Rui Costa",
                "email": "rui.costa@example.com",
                "street": "Rua do Almada 3",
                "postalCode": "4050-036"
            }),
        )
        .await?
        .expect_status(StatusCode::CREATED)?;

    let stored = scope.core().colaborators().list().await.unwrap();
    assert_eq!(stored.len(), 4);
    assert_eq!(stored[3].id, 4);

    drop(scope);
    host.shutdown().await
}

#[tokio::test]
async fn post_with_invalid_payload_is_rejected() -> Result<(), HarnessError> {
    let host = TestHost::start().await?;
    let client = host.create_client(ClientOptions::default())?;

    let bad_email = client
        .post_json(
            "/api/colaborator",
            &json!({
                "name": "John Doe",
                "email": "john.doe",
                "street": "adlkfjasdlkfs",
                "postalCode": "4000-000"
            }),
        )
        .await?;
    assert_eq!(bad_email.status, StatusCode::BAD_REQUEST);

    let malformed = client
        .post_raw("/api/colaborator", "application/json", "{not json")
        .await?;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
    let body: serde_json::Value = malformed.json()?;
    assert_eq!(body["status"], 400);

    assert!(client.get("/api/colaborator").await?.json_array()?.is_empty());
    host.shutdown().await
}
