use serde::Deserialize;
use tubeseed_http::{Auth, HttpClient, HttpError, RequestOpts};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Deserialize)]
struct Echo {
    ok: bool,
}

#[tokio::test]
async fn sends_query_and_api_key_param() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/search"))
        .and(query_param("part", "id,snippet"))
        .and(query_param("key", "AIza-test"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ok":true}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&format!("{}/v3", server.uri())).unwrap();
    let got: Echo = client
        .get_json(
            "search",
            RequestOpts {
                query: Some(vec![("part", "id,snippet".into())]),
                auth: Some(Auth::Query {
                    name: "key",
                    value: "AIza-test".into(),
                }),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(got.ok);
}

#[tokio::test]
async fn api_error_envelope_becomes_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(400).set_body_string(
            r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","errors":[{"reason":"badRequest"}]}}"#,
        ))
        .mount(&server)
        .await;

    let client = HttpClient::new(&server.uri()).unwrap();
    let err = client
        .get_json::<Echo>("search", RequestOpts::default())
        .await
        .unwrap_err();

    match &err {
        HttpError::Api {
            status,
            message,
            reason,
        } => {
            assert_eq!(status.as_u16(), 400);
            assert!(message.starts_with("API key not valid"));
            assert_eq!(reason.as_deref(), Some("badRequest"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert_eq!(err.status().map(|s| s.as_u16()), Some(400));
    assert!(err.to_string().ends_with("(badRequest)"));
}

#[tokio::test]
async fn undecodable_success_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
        .mount(&server)
        .await;

    let client = HttpClient::new(&server.uri()).unwrap();
    let err = client
        .get_json::<Echo>("anything", RequestOpts::default())
        .await
        .unwrap_err();

    match err {
        HttpError::Decode(_, snippet) => assert_eq!(snippet, "<html>nope</html>"),
        other => panic!("expected Decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_host_is_network_error() {
    // Bind and drop a server so the port is closed.
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };

    let client = HttpClient::new(&uri).unwrap();
    let err = client
        .get_json::<Echo>(
            "search",
            RequestOpts {
                query: Some(vec![("q", "cats".into())]),
                auth: Some(Auth::Query {
                    name: "key",
                    value: "AIza-SECRET-123".into(),
                }),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, HttpError::Network(_)));
    assert!(err.status().is_none());

    let message = err.to_string();
    assert!(!message.contains("AIza-SECRET-123"), "key leaked: {message}");
    assert!(message.contains("q=cats"), "redacted url missing: {message}");
}

#[test]
fn rejects_non_base_urls() {
    assert!(matches!(
        HttpClient::new("mailto:someone@example.com"),
        Err(HttpError::Url(_))
    ));
    assert!(matches!(HttpClient::new("not a url"), Err(HttpError::Url(_))));
}
