//! Integration tests for the subgraph client
//!
//! These tests use wiremock to stand in for a subgraph gateway and check
//! the full request/response cycle, error classification and retries.

use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use subgraph_client::{GraphClient, GraphClientConfig, GraphError, GraphRequest, RetryConfig};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Deserialize, PartialEq)]
struct Yeeter {
    id: String,
    goal: String,
}

#[derive(Debug, Deserialize, PartialEq)]
struct YeeterData {
    yeeter: Option<Yeeter>,
}

fn client(server: &MockServer) -> GraphClient {
    GraphClient::new(GraphClientConfig::new(format!("{}/subgraph", server.uri()))).unwrap()
}

// =============================================================================
// Successful Request Tests
// =============================================================================

#[tokio::test]
async fn test_query_posts_inline_query() {
    let server = MockServer::start().await;
    let query = "{yeeter(id: \"0xabc\") {id goal}}";

    Mock::given(method("POST"))
        .and(path("/subgraph"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "query": query })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "yeeter": { "id": "0xabc", "goal": "1000000000000000000" } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let data: YeeterData = client(&server).query(GraphRequest::new(query)).await.unwrap();

    assert_eq!(
        data.yeeter,
        Some(Yeeter {
            id: "0xabc".to_string(),
            goal: "1000000000000000000".to_string()
        })
    );
}

#[tokio::test]
async fn test_null_entity_is_data() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "yeeter": null } })))
        .mount(&server)
        .await;

    let data: YeeterData = client(&server).query(GraphRequest::new("{}")).await.unwrap();
    assert_eq!(data.yeeter, None);
}

#[tokio::test]
async fn test_default_headers_sent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("x-api-key", "k"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "yeeter": null } })))
        .expect(1)
        .mount(&server)
        .await;

    let config = GraphClientConfig::new(server.uri()).with_header("x-api-key", "k");
    let client = GraphClient::new(config).unwrap();
    let _: YeeterData = client.query(GraphRequest::new("{}")).await.unwrap();
}

// =============================================================================
// Error Tests
// =============================================================================

#[tokio::test]
async fn test_graphql_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{ "message": "Failed to decode `id` value" }]
        })))
        .mount(&server)
        .await;

    let result: Result<YeeterData, _> = client(&server).query(GraphRequest::new("{}")).await;

    match result {
        Err(GraphError::Graphql(errors)) => {
            assert_eq!(errors.len(), 1);
            assert!(errors[0].message.contains("decode"));
        }
        other => panic!("expected GraphQL error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_http_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
        .mount(&server)
        .await;

    let result: Result<YeeterData, _> = client(&server).query(GraphRequest::new("{}")).await;

    let err = result.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert!(!err.is_recoverable());
    assert_eq!(
        err,
        GraphError::Status {
            status: 401,
            body: "bad key".to_string()
        }
    );
}

#[tokio::test]
async fn test_invalid_json() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let result: Result<YeeterData, _> = client(&server).query(GraphRequest::new("{}")).await;
    assert!(matches!(result, Err(GraphError::Decode(_))));
}

#[tokio::test]
async fn test_missing_data() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let result: Result<YeeterData, _> = client(&server).query(GraphRequest::new("{}")).await;
    assert_eq!(result, Err(GraphError::EmptyData));
}

#[tokio::test]
async fn test_timeout_is_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": { "yeeter": null } }))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let config = GraphClientConfig::new(server.uri()).with_timeout(Duration::from_millis(50));
    let client = GraphClient::new(config).unwrap();
    let result: Result<YeeterData, _> = client.query(GraphRequest::new("{}")).await;

    let err = result.unwrap_err();
    assert!(err.is_network_error(), "unexpected error: {err:?}");
}

// =============================================================================
// Retry Tests
// =============================================================================

#[tokio::test]
async fn test_no_retry_by_default() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let result: Result<YeeterData, _> = client(&server).query(GraphRequest::new("{}")).await;
    assert_eq!(result.unwrap_err().status(), Some(503));
}

#[tokio::test]
async fn test_retries_recoverable_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "yeeter": null } })))
        .expect(1)
        .mount(&server)
        .await;

    let config = GraphClientConfig::new(server.uri())
        .with_retry(RetryConfig::new(3).with_initial_delay(Duration::from_millis(5)));
    let client = GraphClient::new(config).unwrap();

    let data: YeeterData = client.query(GraphRequest::new("{}")).await.unwrap();
    assert_eq!(data.yeeter, None);
}

#[tokio::test]
async fn test_does_not_retry_client_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400))
        .expect(1)
        .mount(&server)
        .await;

    let config = GraphClientConfig::new(server.uri())
        .with_retry(RetryConfig::new(3).with_initial_delay(Duration::from_millis(5)));
    let client = GraphClient::new(config).unwrap();

    let result: Result<YeeterData, _> = client.query(GraphRequest::new("{}")).await;
    assert_eq!(result.unwrap_err().status(), Some(400));
}
