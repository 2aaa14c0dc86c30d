use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use kdoc::bootstrap::app_context::{AppContext, AppServices};
use kdoc::bootstrap::config::Config;
use kdoc::infrastructure::corpus::FsCorpus;

const FIRST: &str = "20250101T000000--kdoc-100-first.html";
const SECOND: &str = "20250102T000000--kdoc-200-second.html";
const THIRD: &str = "20250103T000000--kdoc-300-third.html";
const INJECTED: &str = "20250104T000000--kdoc-400-already-injected.html";
const DRAFT_500: &str = "20250101T120000--kdoc-500-draft-doc__draft.html";
const DRAFT_600: &str = "20250102T120000--kdoc-600-draft-doc__draft.html";

fn write(dir: &Path, name: &str, body: &str) {
    std::fs::write(dir.join(name), body).unwrap();
}

fn page(text: &str) -> String {
    format!("<html><head></head><body><div id=\"content\">{text}</div></body></html>")
}

fn app_for(public_dir: &Path) -> Router {
    let cfg = Config {
        public_dir: public_dir.to_string_lossy().into_owned(),
        ..Config::default()
    };
    let services = AppServices::new(Arc::new(FsCorpus::new(public_dir)));
    kdoc::presentation::http::router(AppContext::new(cfg, services))
}

fn corpus(with_drafts: bool) -> TempDir {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    write(dir, FIRST, &page("First"));
    write(dir, SECOND, &page("Second"));
    write(dir, THIRD, &page("Third"));
    write(
        dir,
        INJECTED,
        "<html><head></head><body><div id=\"navigation-buttons\">Already injected</div><div id=\"content\">Content</div></body></html>",
    );
    if with_drafts {
        write(dir, DRAFT_500, "<html><body><div id=\"content\">Draft 500</div></body></html>");
        write(dir, DRAFT_600, "<html><body><div id=\"content\">Draft 600</div></body></html>");
    }
    temp
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let res = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

#[tokio::test]
async fn next_returns_following_page() {
    let temp = corpus(false);
    let app = app_for(temp.path());
    let (status, body) = get_json(&app, &format!("/api/next?current={FIRST}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "next": format!("/{SECOND}"), "kdocNumber": 200 }));
}

#[tokio::test]
async fn next_accepts_encoded_site_path() {
    let temp = corpus(false);
    let app = app_for(temp.path());
    let (_, body) = get_json(&app, &format!("/api/next?current=%2F{SECOND}")).await;
    assert_eq!(body["next"], json!(format!("/{THIRD}")));
}

#[tokio::test]
async fn next_on_last_page_is_null() {
    let temp = corpus(false);
    let app = app_for(temp.path());
    let (status, body) = get_json(&app, &format!("/api/next?current={INJECTED}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "next": null }));
}

#[tokio::test]
async fn invalid_current_is_null() {
    let temp = corpus(false);
    let app = app_for(temp.path());
    let (_, next) = get_json(&app, "/api/next?current=invalid.html").await;
    let (_, prev) = get_json(&app, "/api/prev?current=invalid.html").await;
    let (_, bare) = get_json(&app, "/api/next").await;
    assert_eq!(next, json!({ "next": null }));
    assert_eq!(prev, json!({ "prev": null }));
    assert_eq!(bare, json!({ "next": null }));
}

#[tokio::test]
async fn prev_walks_backwards_and_stops_at_first() {
    let temp = corpus(false);
    let app = app_for(temp.path());
    let (_, body) = get_json(&app, &format!("/api/prev?current={THIRD}")).await;
    assert_eq!(body, json!({ "prev": format!("/{SECOND}"), "kdocNumber": 200 }));
    let (_, body) = get_json(&app, &format!("/api/prev?current={FIRST}")).await;
    assert_eq!(body, json!({ "prev": null }));
}

#[tokio::test]
async fn draft_only_moves_between_drafts() {
    let temp = corpus(true);
    let app = app_for(temp.path());

    let (_, body) = get_json(&app, &format!("/api/next?current={FIRST}&draftOnly=true")).await;
    assert_eq!(body, json!({ "next": format!("/{DRAFT_500}"), "kdocNumber": 500 }));

    let (_, body) = get_json(&app, &format!("/api/next?current={DRAFT_500}&draftOnly=true")).await;
    assert_eq!(body, json!({ "next": format!("/{DRAFT_600}"), "kdocNumber": 600 }));

    let (_, body) = get_json(&app, &format!("/api/prev?current={DRAFT_600}&draftOnly=true")).await;
    assert_eq!(body, json!({ "prev": format!("/{DRAFT_500}"), "kdocNumber": 500 }));

    let (_, body) = get_json(&app, &format!("/api/next?current={FIRST}&draftOnly=false")).await;
    assert_eq!(body["kdocNumber"], json!(200));
}

#[tokio::test]
async fn random_returns_a_kdoc_page() {
    let temp = corpus(true);
    let app = app_for(temp.path());
    let (status, body) = get_json(&app, "/api/random").await;
    assert_eq!(status, StatusCode::OK);
    let path = body["random"].as_str().unwrap();
    assert!(path.starts_with('/') && path.contains("--kdoc-") && path.ends_with(".html"));
    let number = body["kdocNumber"].as_u64().unwrap();
    assert!((100..=600).contains(&number));
}

#[tokio::test]
async fn random_on_empty_corpus_is_null() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "index.html", &page("Index"));
    let app = app_for(temp.path());
    let (status, body) = get_json(&app, "/api/random").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "random": null }));
}

#[tokio::test]
async fn unreadable_corpus_is_a_server_error() {
    let temp = TempDir::new().unwrap();
    let app = app_for(&temp.path().join("missing"));

    let (status, body) = get_json(&app, &format!("/api/next?current={FIRST}")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to get next page" }));

    let (status, _) = get_json(&app, &format!("/api/prev?current={FIRST}")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, body) = get_json(&app, "/api/random").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to get random page" }));

    let (_, body) = get_json(&app, "/api/health").await;
    assert_eq!(body, json!({ "status": "degraded" }));
}

#[tokio::test]
async fn lookup_by_number() {
    let temp = corpus(false);
    let app = app_for(temp.path());
    let (_, body) = get_json(&app, "/api/kdoc/300").await;
    assert_eq!(body, json!({ "path": format!("/{THIRD}"), "kdocNumber": 300 }));
    let (_, body) = get_json(&app, "/api/kdoc/301").await;
    assert_eq!(body, json!({ "path": null }));
}

#[tokio::test]
async fn drum_layout_endpoint() {
    let temp = corpus(false);
    let app = app_for(temp.path());
    let (status, body) =
        get_json(&app, "/api/drum/layout?contentHeight=2000&windowHeight=800").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["numSegments"], json!(3));
    assert_eq!(body["spacerHeight"], json!(2840.0));
    assert_eq!(body["segments"][1], json!({ "index": 1, "topOffset": -850.0 }));

    let (_, body) = get_json(
        &app,
        "/api/drum/layout?contentHeight=0&windowHeight=800&scrollY=0",
    )
    .await;
    assert_eq!(body["numSegments"], json!(1));
    assert_eq!(body["segments"][0]["position"]["y"], json!(0.0));

    let (status, _) = get(&app, "/api/drum/layout?contentHeight=1e12&windowHeight=800").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn pages_get_navigation_buttons() {
    let temp = corpus(false);
    let app = app_for(temp.path());
    let (status, html) = get(&app, &format!("/{FIRST}")).await;
    assert_eq!(status, StatusCode::OK);
    for id in [
        "id=\"navigation-buttons\"",
        "id=\"nav-prev\"",
        "id=\"nav-next\"",
        "id=\"nav-random\"",
        "id=\"draft-only-toggle\"",
    ] {
        assert!(html.contains(id), "missing {id}");
    }
    assert!(html.contains("/js/navigation.js"));
    assert!(html.contains("First"));
}

#[tokio::test]
async fn buttons_are_not_injected_twice() {
    let temp = corpus(false);
    let app = app_for(temp.path());
    let (_, html) = get(&app, &format!("/{INJECTED}")).await;
    assert_eq!(html.matches("id=\"navigation-buttons\"").count(), 1);
}

#[tokio::test]
async fn root_serves_injected_index() {
    let temp = corpus(false);
    write(temp.path(), "index.html", &page("Index Page"));
    let app = app_for(temp.path());
    let (status, html) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Index Page"));
    assert!(html.contains("id=\"navigation-buttons\""));
    assert!(html.contains("/js/navigation.js"));
}

#[tokio::test]
async fn other_files_are_served_as_is() {
    let temp = corpus(false);
    write(temp.path(), "graph.json", "{\"nodes\":[]}");
    let app = app_for(temp.path());
    let (status, body) = get(&app, "/graph.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "{\"nodes\":[]}");

    let (status, _) = get(&app, "/missing.html").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
