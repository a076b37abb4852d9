//! Tests for the type-safe configuration builder and the YAML loader

use std::time::Duration;

use booklet_export::utils::DEFAULT_API_BASE_URL;
use booklet_export::{BookId, ConfigError, ExportConfig};
use tempfile::TempDir;

#[test]
fn test_builder_requires_session_and_cookie() {
    // This should not compile if uncommented - testing compile-time guarantees
    // let config = ExportConfig::builder().build();

    // This should also not compile - missing cookie
    // let config = ExportConfig::builder().session_id("s").build();

    // This SHOULD compile - both required fields provided
    let temp_dir = TempDir::new().unwrap();
    let config = ExportConfig::builder()
        .session_id("abc")
        .cookie("a=1")
        .book_ids(["42"])
        .save_dir(temp_dir.path())
        .build()
        .unwrap();

    assert_eq!(config.session_id(), "abc");
    assert_eq!(config.cookie(), "a=1");
    assert_eq!(config.save_dir(), temp_dir.path());
}

#[test]
fn test_builder_optional_fields_have_defaults() {
    let config = ExportConfig::builder()
        .session_id("abc")
        .cookie("")
        .book_ids(["42"])
        .build()
        .unwrap();

    assert!(!config.overwrite_existing());
    assert!(!config.fetch_book_ids_online());
    assert_eq!(config.request_delay(), Duration::from_secs(1));
    assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
    assert!(config.max_concurrent_books() >= 1);
    assert!(config.save_dir().ends_with("book"));
}

#[test]
fn test_builder_setters_are_order_independent() {
    let config = ExportConfig::builder()
        .request_delay_ms(250)
        .max_concurrent_books(3)
        .session_id("abc")
        .overwrite_existing(true)
        .cookie("a=1")
        .book_ids(vec![String::from("1"), String::from("2")])
        .build()
        .unwrap();

    assert_eq!(config.request_delay(), Duration::from_millis(250));
    assert_eq!(config.max_concurrent_books(), 3);
    assert!(config.overwrite_existing());
    assert_eq!(config.book_ids(), [BookId::new("1"), BookId::new("2")]);
}

#[test]
fn test_missing_book_ids_rejected_without_discovery() {
    let result = ExportConfig::builder().session_id("abc").cookie("").build();
    assert!(matches!(result, Err(ConfigError::MissingBookIds)));

    let config = ExportConfig::builder()
        .session_id("abc")
        .cookie("")
        .fetch_book_ids_online(true)
        .build()
        .unwrap();
    assert!(config.book_ids().is_empty());
}

#[test]
fn test_invalid_values_rejected() {
    let zero_workers = ExportConfig::builder()
        .session_id("abc")
        .cookie("")
        .book_ids(["1"])
        .max_concurrent_books(0)
        .build();
    assert!(matches!(zero_workers, Err(ConfigError::Invalid(_))));

    let empty_session = ExportConfig::builder()
        .session_id("  ")
        .cookie("")
        .book_ids(["1"])
        .build();
    assert!(matches!(empty_session, Err(ConfigError::Invalid(_))));
}

#[tokio::test]
async fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yml");
    std::fs::write(
        &path,
        "sessionid: s\ncookie: \"x=1\"\nfetch_book_ids_online: true\nbook_ids: []\nsave_dir: /tmp/out\noverwrite_existing: true\n",
    )
    .unwrap();

    let config = ExportConfig::load(&path).await.unwrap();

    assert!(config.fetch_book_ids_online());
    assert!(config.overwrite_existing());
    assert_eq!(config.save_dir(), std::path::Path::new("/tmp/out"));
}

#[tokio::test]
async fn test_load_missing_file_is_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = ExportConfig::load(&temp_dir.path().join("absent.yml")).await;
    assert!(matches!(result, Err(ConfigError::Read { .. })));
}
