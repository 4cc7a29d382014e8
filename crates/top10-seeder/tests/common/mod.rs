//! Shared fixtures for seeder integration tests

#![allow(dead_code)]

use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use top10_seeder::SeederConfig;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SEARCH_PATH: &str = "/w/api.php";
pub const SUMMARY_PATH: &str = "/api/rest_v1/page/summary";

/// Config pointing every endpoint at `server` and every output into `dir`.
/// Backoff is kept tiny so retry tests stay fast.
pub fn test_config(server: &MockServer, dir: &TempDir) -> SeederConfig {
    SeederConfig::builder()
        .search_url(format!("{}{}", server.uri(), SEARCH_PATH))
        .summary_url(format!("{}{}/", server.uri(), SUMMARY_PATH))
        .contact_email("tests@example.com")
        .timeout_secs(5)
        .max_attempts(4)
        .backoff_step_ms(5)
        .image_dir(dir.path().join("images"))
        .script_path(dir.path().join("seed.sql"))
        .database_url(database_url(dir))
        .build()
}

pub fn database_url(dir: &TempDir) -> String {
    format!("sqlite://{}", dir.path().join("db.sqlite3").display())
}

/// Write a catalog JSON with no editorial defaults
pub fn write_catalog(dir: &Path, name: &str, places: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let body = json!({ "places": places });
    std::fs::write(&path, body.to_string()).unwrap();
    path
}

pub fn search_body(title: &str) -> Value {
    json!({
        "batchcomplete": "",
        "query": { "search": [{ "ns": 0, "title": title, "pageid": 1 }] }
    })
}

pub fn empty_search_body() -> Value {
    json!({ "batchcomplete": "", "query": { "searchinfo": { "totalhits": 0 }, "search": [] } })
}

pub async fn mount_search(server: &MockServer, query: &str, title: &str) {
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("srsearch", query))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(title)))
        .mount(server)
        .await;
}

/// Summary stub for a title that needs no percent-encoding
pub async fn mount_summary(server: &MockServer, title: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("{SUMMARY_PATH}/{title}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Search + summary stubs for a one-word city with coordinates
pub async fn mount_city(server: &MockServer, place: &str, title: &str, lat: f64, lon: f64) {
    mount_search(server, place, title).await;
    mount_summary(
        server,
        title,
        json!({
            "title": title,
            "extract": format!("{title} is a city in the United States.\nSecond paragraph."),
            "coordinates": { "lat": lat, "lon": lon }
        }),
    )
    .await;
}
