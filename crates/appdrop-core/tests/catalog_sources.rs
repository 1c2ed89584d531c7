use std::time::Duration;

use appdrop_core::{CatalogError, CatalogSource, Platform, load_catalog};
use tempfile::tempdir;

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()
        .expect("http client should build")
}

#[tokio::test]
async fn loads_bundled_catalog() {
    let catalog = load_catalog(&CatalogSource::Embedded, &client())
        .await
        .expect("bundled catalog should load");

    assert!(!catalog.is_empty());
    assert!(
        catalog
            .releases()
            .iter()
            .any(|release| release.platform == Platform::Ios)
    );
}

#[tokio::test]
async fn loads_catalog_from_file() {
    let temp_dir = tempdir().expect("create temp dir");
    let path = temp_dir.path().join("apps.json");
    std::fs::write(
        &path,
        r#"[{
            "id": "x",
            "name": "X",
            "date": "2025-02-02",
            "downloadUrl": "https://example.com/x.apk",
            "platform": "android",
            "changelog": ["one", "two"]
        }]"#,
    )
    .expect("write catalog");

    let catalog = load_catalog(&CatalogSource::File(path), &client())
        .await
        .expect("file catalog should load");

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.releases()[0].changelog, vec!["one", "two"]);
}

#[tokio::test]
async fn missing_file_reports_read_error() {
    let temp_dir = tempdir().expect("create temp dir");
    let path = temp_dir.path().join("absent.json");

    let result = load_catalog(&CatalogSource::File(path), &client()).await;

    assert!(matches!(
        result,
        Err(CatalogError::Read { kind, .. }) if kind == std::io::ErrorKind::NotFound
    ));
}

#[tokio::test]
async fn malformed_file_reports_parse_error() {
    let temp_dir = tempdir().expect("create temp dir");
    let path = temp_dir.path().join("apps.json");
    std::fs::write(&path, r#"[{"id": "x", "platform": "windows"}]"#).expect("write catalog");

    let result = load_catalog(&CatalogSource::File(path), &client()).await;

    assert!(matches!(result, Err(CatalogError::Parse { .. })));
}

#[tokio::test]
async fn unreachable_remote_reports_request_error() {
    let source = CatalogSource::Remote("http://127.0.0.1:9/apps.json".to_string());

    let result = load_catalog(&source, &client()).await;

    assert!(matches!(result, Err(CatalogError::Request { .. })));
}
