//! Pipeline tests against a mocked formatting API.

use std::time::Duration;

use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dateline_core::error::DatelineError;
use dateline_relay::client::FormatClient;
use dateline_relay::request::FormatRequest;

fn client_for(server: &MockServer) -> FormatClient {
    FormatClient::with_timeouts(
        server.uri(),
        Some("test-key".into()),
        Duration::from_millis(500),
        Duration::from_millis(500),
    )
}

#[tokio::test]
async fn text_request_carries_bearer_and_returns_dates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/format/text"))
        .and(header("Authorization", "Bearer test-key"))
        .and(body_json(serde_json::json!({ "text": "tour dates" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "formatted_dates": "A\nB" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let out = client_for(&server)
        .format(FormatRequest::Text {
            text: "tour dates".into(),
        })
        .await
        .unwrap();
    assert_eq!(out, "A\nB");
}

#[tokio::test]
async fn api_error_detail_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/format/text"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(serde_json::json!({ "detail": "bad input" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .format(FormatRequest::Text { text: "x".into() })
        .await
        .unwrap_err();
    match err {
        DatelineError::Api(detail) => assert_eq!(detail, "bad input"),
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_body_is_used_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/format/text"))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .format(FormatRequest::Text { text: "x".into() })
        .await
        .unwrap_err();
    match err {
        DatelineError::Api(detail) => assert_eq!(detail, "upstream exploded"),
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_dates_field_yields_fallback_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/format/text"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let out = client_for(&server)
        .format(FormatRequest::Text { text: "x".into() })
        .await
        .unwrap();
    assert_eq!(out, "Error: No dates found");
}

#[tokio::test]
async fn slow_api_maps_to_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/format/text"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "formatted_dates": "late" }))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .format(FormatRequest::Text { text: "x".into() })
        .await
        .unwrap_err();
    assert!(matches!(err, DatelineError::Timeout));
    assert_eq!(
        err.user_message(),
        "Error: Request timed out. Please try again."
    );
}

#[tokio::test]
async fn image_request_is_multipart_without_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/format/image"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "formatted_dates": "June 3 - Amsterdam" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let out = client_for(&server)
        .format(FormatRequest::Image {
            bytes: vec![0xFF, 0xD8, 0xFF],
            filename: "poster.jpg".into(),
            content_type: "image/jpeg".into(),
        })
        .await
        .unwrap();
    assert_eq!(out, "June 3 - Amsterdam");

    let requests = server.received_requests().await.unwrap();
    let upload = &requests[0];
    assert!(!upload.headers.contains_key("authorization"));
    let ct = upload.headers.get("content-type").unwrap().to_str().unwrap();
    assert!(ct.starts_with("multipart/form-data"));
    let body = String::from_utf8_lossy(&upload.body);
    assert!(body.contains("name=\"file\""));
    assert!(body.contains("filename=\"poster.jpg\""));
}

#[tokio::test]
async fn image_url_download_packages_metadata() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posters/tour.png"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(vec![1u8, 2, 3], "image/png"))
        .mount(&server)
        .await;

    let request = client_for(&server)
        .download_image(&format!("{}/posters/tour.png", server.uri()))
        .await
        .unwrap();
    match request {
        FormatRequest::Image {
            bytes,
            filename,
            content_type,
        } => {
            assert_eq!(bytes, vec![1, 2, 3]);
            assert_eq!(filename, "tour.png");
            assert_eq!(content_type, "image/png");
        }
        other => panic!("expected Image request, got {other:?}"),
    }
}

#[tokio::test]
async fn image_url_download_failure_carries_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone.jpg"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .download_image(&format!("{}/gone.jpg", server.uri()))
        .await
        .unwrap_err();
    match err {
        DatelineError::Download { status } => assert_eq!(status, 404),
        other => panic!("expected Download error, got {other:?}"),
    }
    assert_eq!(err.user_message(), "Error: Failed to download image: HTTP 404");
}
