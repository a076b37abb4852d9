//! Test utilities and helper functions for the booklet_export test suite

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use booklet_export::utils::{BOOK_INFO_PATH, SECTION_PATH};
use booklet_export::{BookletClient, ExportConfig, RunJournal};
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::json;

#[allow(dead_code)]
pub const SESSION_ID: &str = "test-session";
#[allow(dead_code)]
pub const RAW_COOKIE: &str = "csrf=abc; theme=dark";

/// Client against the mock server with no inter-request delay
#[allow(dead_code)]
pub fn test_client(server: &ServerGuard) -> BookletClient {
    BookletClient::new(server.url(), SESSION_ID, RAW_COOKIE, Duration::ZERO)
        .expect("Failed to build test client")
}

/// Journal writing into `dir`
#[allow(dead_code)]
pub fn open_journal(dir: &Path) -> Arc<RunJournal> {
    Arc::new(RunJournal::open(dir).expect("Failed to open test journal"))
}

/// Config for a run against the mock server
#[allow(dead_code)]
pub fn test_config(server: &ServerGuard, save_dir: &Path, log_dir: &Path, ids: &[&str]) -> ExportConfig {
    ExportConfig::builder()
        .session_id(SESSION_ID)
        .cookie(RAW_COOKIE)
        .book_ids(ids.iter().copied())
        .save_dir(save_dir)
        .log_dir(log_dir)
        .api_base_url(server.url())
        .request_delay_ms(0)
        .max_concurrent_books(4)
        .build()
        .expect("Failed to create test config")
}

/// Book info endpoint answering with a published book.
///
/// `sections` are `(id, section_id, title)` in the order the API returns them.
#[allow(dead_code)]
pub async fn mock_book_info(
    server: &mut ServerGuard,
    book_id: &str,
    title: &str,
    sections: &[(&str, &str, &str)],
) -> Mock {
    let sections: Vec<_> = sections
        .iter()
        .map(|(id, section_id, title)| json!({"id": id, "section_id": section_id, "title": title}))
        .collect();
    let body = json!({
        "err_no": 0,
        "err_msg": "success",
        "data": {
            "booklet": { "base_info": { "title": title } },
            "sections": sections,
        }
    });

    server
        .mock("POST", BOOK_INFO_PATH)
        .match_body(Matcher::PartialJson(json!({ "booklet_id": book_id })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

/// Book info endpoint answering 200 with `data: null`
#[allow(dead_code)]
pub async fn mock_book_unavailable(server: &mut ServerGuard, book_id: &str) -> Mock {
    server
        .mock("POST", BOOK_INFO_PATH)
        .match_body(Matcher::PartialJson(json!({ "booklet_id": book_id })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"err_no": 0, "err_msg": "booklet is being written", "data": null}"#)
        .create_async()
        .await
}

/// Book info endpoint failing with `status`
#[allow(dead_code)]
pub async fn mock_book_error(server: &mut ServerGuard, book_id: &str, status: usize) -> Mock {
    server
        .mock("POST", BOOK_INFO_PATH)
        .match_body(Matcher::PartialJson(json!({ "booklet_id": book_id })))
        .with_status(status)
        .with_body("Error")
        .create_async()
        .await
}

/// Section endpoint returning `markdown` for `section_id`
#[allow(dead_code)]
pub async fn mock_section(server: &mut ServerGuard, section_id: &str, markdown: &str) -> Mock {
    let body = json!({
        "err_no": 0,
        "data": { "section": { "markdown_show": markdown } }
    });
    server
        .mock("POST", SECTION_PATH)
        .match_body(Matcher::PartialJson(json!({ "section_id": section_id })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

/// Image endpoint serving `bytes`
#[allow(dead_code)]
pub async fn mock_image(server: &mut ServerGuard, path: &str, bytes: &[u8]) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "image/png")
        .with_body(bytes)
        .create_async()
        .await
}

/// Read a file under `dir` to a string
#[allow(dead_code)]
pub fn read(dir: &Path, relative: &str) -> String {
    std::fs::read_to_string(dir.join(relative))
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", dir.join(relative).display()))
}
