use continuity_api::{ApiError, ContinuityClient, RestClient};
use continuity_types::RestEndpoint;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ContinuityClient {
    let address = server.address();
    ContinuityClient::new(&RestEndpoint::new(address.ip().to_string(), address.port().to_string())).expect("client")
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn post_sends_json_body_and_decodes_object() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/workloadmodel/wessbas/create"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"data": "logs/app", "tag": "demo"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok", "link": "abc123"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .post_json("/workloadmodel/wessbas/create", &json!({"data": "logs/app", "tag": "demo"}))
        .expect("post succeeds")
        .expect("object body");

    assert_eq!(response.get("link"), Some(&json!("abc123")));
    assert_eq!(response.get("message"), Some(&json!("ok")));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn get_passes_query_string_and_treats_empty_body_as_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/workloadmodel/wait/abc123"))
        .and(query_param("timeout", "40000"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .get_json("/workloadmodel/wait/abc123?timeout=40000")
        .expect("get succeeds");

    assert!(response.is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn error_status_carries_code_reason_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream gone"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client.get_json("/workloadmodel/wait/abc123?timeout=40000").unwrap_err();

    match error {
        ApiError::Status { status, reason, body } => {
            assert_eq!(status, 502);
            assert_eq!(reason, "Bad Gateway");
            assert_eq!(body, "upstream gone");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn non_object_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[1,2,3]"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client.get_json("/anything").unwrap_err();
    assert!(matches!(error, ApiError::Decode { .. }));
}

#[test]
fn unreachable_host_is_a_transport_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };
    let client = ContinuityClient::new(&RestEndpoint::new("127.0.0.1", port.to_string())).expect("client");
    let error = client.get_json("/workloadmodel/wait/x?timeout=1").unwrap_err();
    assert!(matches!(error, ApiError::Transport(_)), "unexpected error: {error:?}");
}
