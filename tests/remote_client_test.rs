//! Tests for the booklet API client against a mock server

use std::time::{Duration, Instant};

use booklet_export::utils::{BOOK_INFO_PATH, BOOK_LIST_PATH, SECTION_PATH};
use booklet_export::{ApiError, BookId, BookInfoResult, BookletClient};
use mockito::{Matcher, Server};
use serde_json::json;

mod common;
use common::*;

#[tokio::test]
async fn test_book_info_keeps_section_order() {
    let mut server = Server::new_async().await;
    let mock = mock_book_info(
        &mut server,
        "7001",
        "Async Rust",
        &[("30", "s30", "Gamma"), ("10", "s10", "Alpha"), ("20", "s20", "Beta")],
    )
    .await;

    let client = test_client(&server);
    let result = client.get_book_info(&BookId::new("7001")).await.unwrap();

    let BookInfoResult::Available(info) = result else {
        panic!("expected an available book, got {result:?}");
    };
    assert_eq!(info.title, "Async Rust");
    let titles: Vec<&str> = info.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["Gamma", "Alpha", "Beta"]);
    assert_eq!(info.sections[0].section_id, "s30");
    assert_eq!(info.sections[0].asset_key(), "30");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_book_info_sends_session_cookie() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", BOOK_INFO_PATH)
        .match_header("cookie", Matcher::Exact(format!("sessionid={SESSION_ID}; {RAW_COOKIE}")))
        .match_body(Matcher::Json(json!({ "booklet_id": "7001" })))
        .with_status(200)
        .with_body(r#"{"data": {"booklet": {"base_info": {"title": "T"}}, "sections": []}}"#)
        .create_async()
        .await;

    let client = test_client(&server);
    let result = client.get_book_info(&BookId::new("7001")).await.unwrap();
    assert!(matches!(result, BookInfoResult::Available(ref info) if info.sections.is_empty()));

    mock.assert_async().await;
}

#[tokio::test]
async fn test_null_data_is_not_yet_available() {
    let mut server = Server::new_async().await;
    mock_book_unavailable(&mut server, "7002").await;

    let client = test_client(&server);
    let result = client.get_book_info(&BookId::new("7002")).await.unwrap();

    assert_eq!(
        result,
        BookInfoResult::NotYetAvailable {
            reason: Some("booklet is being written".to_string())
        }
    );
}

#[tokio::test]
async fn test_missing_data_is_not_yet_available() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", BOOK_INFO_PATH)
        .with_status(200)
        .with_body(r#"{"err_no": 404}"#)
        .create_async()
        .await;

    let client = test_client(&server);
    let result = client.get_book_info(&BookId::new("7003")).await.unwrap();

    assert_eq!(result, BookInfoResult::NotYetAvailable { reason: None });
}

#[tokio::test]
async fn test_server_error_is_transport_error() {
    let mut server = Server::new_async().await;
    mock_book_error(&mut server, "7004", 500).await;

    let client = test_client(&server);
    let err = client.get_book_info(&BookId::new("7004")).await.unwrap_err();

    match err {
        ApiError::Status { endpoint, status } => {
            assert_eq!(endpoint, BOOK_INFO_PATH);
            assert_eq!(status.as_u16(), 500);
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_json_is_decode_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", BOOK_INFO_PATH)
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let client = test_client(&server);
    let err = client.get_book_info(&BookId::new("7005")).await.unwrap_err();

    assert!(matches!(err, ApiError::Decode { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_section_body_returned_verbatim() {
    let mut server = Server::new_async().await;
    let markdown = "# Intro\n\n![diagram](https://cdn.example.com/a.png)\n";
    mock_section(&mut server, "s10", markdown).await;

    let client = test_client(&server);
    let body = client.get_section_body("s10").await.unwrap();

    assert_eq!(body, markdown);
}

#[tokio::test]
async fn test_section_without_markdown_is_missing_field() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", SECTION_PATH)
        .with_status(200)
        .with_body(r#"{"data": {"section": {"title": "draft"}}}"#)
        .create_async()
        .await;

    let client = test_client(&server);
    let err = client.get_section_body("s11").await.unwrap_err();

    assert!(
        matches!(err, ApiError::MissingField { field, .. } if field.contains("markdown_show")),
        "got {err:?}"
    );
}

#[tokio::test]
async fn test_list_books_uses_raw_cookie() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", BOOK_LIST_PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("aid".into(), "2608".into()),
            Matcher::UrlEncoded("spider".into(), "0".into()),
        ]))
        .match_header("cookie", RAW_COOKIE)
        .with_status(200)
        .with_body(r#"{"data": [{"booklet_id": "7101"}, {"booklet_id": 7102}]}"#)
        .create_async()
        .await;

    let client = test_client(&server);
    let ids = client.list_books().await.unwrap();

    assert_eq!(ids, vec![BookId::new("7101"), BookId::new("7102")]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_request_delay_applies_after_failures() {
    let mut server = Server::new_async().await;
    mock_book_error(&mut server, "7006", 503).await;

    let delay = Duration::from_millis(150);
    let client = BookletClient::new(server.url(), SESSION_ID, RAW_COOKIE, delay).unwrap();
    assert_eq!(client.request_delay(), delay);

    let start = Instant::now();
    let result = client.get_book_info(&BookId::new("7006")).await;

    assert!(result.is_err());
    assert!(start.elapsed() >= delay, "delay skipped: {:?}", start.elapsed());
}
