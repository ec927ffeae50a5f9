//! HTTP-level tests for the admin API client against a mock backend.

use std::time::Duration;

use galleria_api::{Credentials, FilterState, ProductPayload, filter_keys};
use galleria_client::{AdminApi, AdminConfig, ClientError, ImageUpload};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> AdminApi {
    AdminApi::new(&AdminConfig::new(&server.uri())).unwrap()
}

#[tokio::test]
async fn test_list_serializes_filters_and_pagination() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/categories"))
        .and(query_param("status", "active"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [
                {"_id": "c1", "name": "Oil paintings"},
                {"_id": "c2", "name": "Watercolors"}
            ],
            "total": 25,
            "currentPage": 1,
            "totalPages": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let mut filters = FilterState::default();
    filters.set(filter_keys::STATUS, "active");

    let page = api.categories().list(&filters).await?;
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, 25);
    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 3);
    Ok(())
}

#[tokio::test]
async fn test_application_failure_surfaces_message_verbatim() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/coupons"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "coupon index unavailable"
        })))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api
        .coupons()
        .list(&FilterState::default())
        .await
        .unwrap_err();
    match err {
        ClientError::Api { message } => assert_eq!(message, "coupon index unavailable"),
        other => panic!("expected Api error, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_unauthorized_maps_to_auth_required() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "message": "token expired"
        })))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api
        .orders()
        .list(&FilterState::default())
        .await
        .unwrap_err();
    match err {
        ClientError::AuthRequired(message) => assert_eq!(message, "token expired"),
        other => panic!("expected AuthRequired, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_missing_entity_maps_to_not_found() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "message": "product not found"
        })))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api.products().get("nope").await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
    Ok(())
}

#[tokio::test]
async fn test_login_attaches_bearer_token() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "token": "tok-1",
            "user": {"_id": "u1", "name": "Vera", "email": "vera@example.com", "role": "admin"}
        })))
        .mount(&server)
        .await;
    // Only matches when the Authorization header carries the issued token.
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [],
            "total": 0,
            "currentPage": 1,
            "totalPages": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let auth = api
        .login(&Credentials {
            email: "vera@example.com".to_string(),
            password: "hunter2".to_string(),
        })
        .await?;
    assert_eq!(auth.token, "tok-1");
    assert_eq!(auth.user.map(|u| u.name), Some("Vera".to_string()));

    let page = api.users().list(&FilterState::default()).await?;
    assert!(page.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_rejected_login_surfaces_message() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "invalid credentials"
        })))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api
        .login(&Credentials {
            email: "vera@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();
    match err {
        ClientError::Api { message } => assert_eq!(message, "invalid credentials"),
        other => panic!("expected Api error, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_remove_acknowledged() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/subscribers/s1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": true})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    api.subscribers().remove("s1").await?;
    Ok(())
}

#[tokio::test]
async fn test_multipart_product_create() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "_id": "p9",
                "title": "Nocturne",
                "price": 1200.0,
                "images": ["/uploads/nocturne.jpg"]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let payload = ProductPayload {
        title: "Nocturne".to_string(),
        description: "Oil on canvas".to_string(),
        price: 1200.0,
        category_id: "c1".to_string(),
        author_id: "a1".to_string(),
        ..Default::default()
    };
    let images = vec![ImageUpload {
        file_name: "nocturne.jpg".to_string(),
        content_type: "image/jpeg".to_string(),
        bytes: vec![0xff, 0xd8, 0xff],
    }];

    let product = api.create_product_with_images(&payload, images).await?;
    assert_eq!(product.id, "p9");
    assert_eq!(product.images.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_slow_backend_maps_to_timeout() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/authors"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "data": []}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let api = AdminApi::new(&AdminConfig::new(&server.uri()).with_timeouts(1000, 50)).unwrap();
    let err = api
        .authors()
        .list(&FilterState::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Timeout), "got {err:?}");
    Ok(())
}
