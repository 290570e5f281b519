//! Loading pagination settings from disk and applying them to a list payload.

use japi_config::ConfigLoader;
use japi_core::{LinkValue, ManyPayload, Payloader, ResourceObject};
use std::fs;
use tempfile::TempDir;

fn loader_with(contents: &str) -> (TempDir, ConfigLoader) {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("default.toml"), contents).expect("write config");
    let loader = ConfigLoader::new(dir.path()).expect("load config");
    (dir, loader)
}

fn articles(count: usize) -> ManyPayload {
    ManyPayload {
        data: (0..count)
            .map(|i| ResourceObject::new("articles", i.to_string()))
            .collect(),
        ..ManyPayload::default()
    }
}

#[test]
fn test_configured_plain_links() {
    let (_dir, loader) = loader_with("[pagination]\ndefault_limit = 25\n");
    let config = loader.get();

    let mut payload = articles(25);
    payload.add_pagination(&config.pagination.paginator("/articles?filter[tag]=rust", 60));

    let links = payload.links.expect("links");
    assert_eq!(
        links.get("next"),
        Some(&LinkValue::Url(
            "/articles?filter[tag]=rust&page[limit]=25&page[offset]=25".to_string()
        ))
    );
    assert_eq!(
        links.href("last"),
        Some("/articles?filter[tag]=rust&page[limit]=25&page[offset]=50")
    );
}

#[test]
fn test_configured_object_links_serialize() {
    let (_dir, loader) = loader_with("[pagination]\ndefault_limit = 10\nlink_style = \"object\"\n");
    let config = loader.get();

    let mut payload = articles(10);
    payload.add_pagination(&config.pagination.paginator("/articles?page[offset]=20", 45));

    let document = serde_json::to_value(&payload).expect("serialize");
    assert_eq!(
        document["links"]["prev"],
        serde_json::json!({ "href": "/articles?page[offset]=10&page[limit]=10" })
    );
    assert_eq!(
        document["links"]["last"]["href"],
        "/articles?page[offset]=40&page[limit]=10"
    );
    assert_eq!(document["data"].as_array().map(Vec::len), Some(10));
}

#[test]
fn test_single_page_adds_no_links() {
    let (_dir, loader) = loader_with("[pagination]\ndefault_limit = 100\n");
    let config = loader.get();

    let mut payload = articles(3);
    payload.add_pagination(&config.pagination.paginator("/articles", 3));

    assert!(payload.links.is_none());
    assert!(serde_json::to_value(&payload).expect("serialize").get("links").is_none());
}
