//! Static pages, the login stub, status pages and static files.

mod common;

use api_adapters::{error::INTERNAL_TEXT, middleware::NOT_FOUND_PAGE};
use axum::http::{header, StatusCode};
use common::TestApp;

#[tokio::test]
async fn index_and_forms_render() {
    let app = TestApp::spawn().await;

    let index = app.get("/").await;
    assert_eq!(index.status, StatusCode::OK);
    assert!(index.content_type().starts_with("text/html"));
    assert!(index.body.contains("Message Board"));

    let login = app.get("/login").await;
    assert_eq!(login.status, StatusCode::OK);
    assert!(login.body.contains("name=\"loginId\""));
    assert!(login.body.contains("name=\"loginPassword\""));

    let create = app.get("/board/create").await;
    assert_eq!(create.status, StatusCode::OK);
    assert!(create.body.contains("action=\"/board/create\""));
}

#[tokio::test]
async fn login_post_is_accepted_without_a_body() {
    let app = TestApp::spawn().await;

    let response = app
        .post_form("/login", "loginId=alice&loginPassword=secret")
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.body.is_empty());

    // missing fields bind to empty strings
    let response = app.post_form("/login", "").await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn throw_is_a_plain_text_500() {
    let app = TestApp::spawn().await;

    let response = app.get("/throw").await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, INTERNAL_TEXT);
    assert!(response.content_type().starts_with("text/plain"));
}

#[tokio::test]
async fn unknown_routes_get_the_generic_404_page() {
    let app = TestApp::spawn().await;

    let response = app.get("/no/such/page").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, NOT_FOUND_PAGE);
    assert!(response.content_type().starts_with("text/plain"));
}

#[tokio::test]
async fn static_files_are_served() {
    let app = TestApp::spawn().await;

    let css = app.get("/static/css/board.css").await;
    assert_eq!(css.status, StatusCode::OK);
    assert!(css.content_type().starts_with("text/css"));
    assert!(css.body.contains("white-space"));

    let missing = app.get("/static/css/missing.css").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn responses_carry_default_headers() {
    let app = TestApp::spawn().await;

    let response = app.get("/").await;
    assert!(response.headers.contains_key("x-request-id"));
    assert_eq!(response.headers[header::SERVER], "message-board");
}
