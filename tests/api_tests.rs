use homework_status_bot::api::PracticumClient;
use homework_status_bot::error::HomeworkError;
use serde_json::json;
use wiremock::matchers::{header, method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_fetch_sends_auth_header_and_cursor() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("Authorization", "OAuth secret"))
        .and(query_param("from_date", "1000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "homeworks": [],
            "current_date": 2000
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = PracticumClient::with_endpoint("secret", server.uri());
    let payload = client.fetch(1000).await.unwrap();

    assert_eq!(payload["current_date"], 2000);
}

#[tokio::test]
async fn test_zero_cursor_substitutes_wall_clock() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"homeworks": []})))
        .mount(&server)
        .await;

    let client = PracticumClient::with_endpoint("secret", server.uri());
    client.fetch(0).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let (_, from_date) = requests[0]
        .url
        .query_pairs()
        .find(|(key, _)| key == "from_date")
        .unwrap();
    assert!(from_date.parse::<i64>().unwrap() > 0);
}

#[tokio::test]
async fn test_non_200_response_is_http_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = PracticumClient::with_endpoint("secret", server.uri());
    let result = client.fetch(1000).await;

    assert!(matches!(result, Err(HomeworkError::HttpStatus(404))));
}

#[tokio::test]
async fn test_invalid_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let client = PracticumClient::with_endpoint("secret", server.uri());
    let result = client.fetch(1000).await;

    assert!(matches!(result, Err(HomeworkError::Decode)));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = PracticumClient::with_endpoint("secret", uri);
    let result = client.fetch(1000).await;

    match result {
        Err(HomeworkError::Transport(cause)) => assert!(!cause.is_empty()),
        other => panic!("expected transport error, got {other:?}"),
    }
}
