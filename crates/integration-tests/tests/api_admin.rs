//! Basic-auth gate on `/admin`.

mod common;

use api_adapters::middleware::UNAUTHORIZED_PAGE;
use auth_adapters::BasicCredentials;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{TestApp, ADMIN_PASSWORD, ADMIN_USER};

fn admin_request(authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::get("/admin/main");
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn missing_credentials_get_a_challenge() {
    let app = TestApp::spawn().await;

    let response = app.send(admin_request(None)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body, UNAUTHORIZED_PAGE);
    let challenge = response.headers[header::WWW_AUTHENTICATE].to_str().unwrap();
    assert!(challenge.starts_with("Basic realm=\"admin\""));
}

#[tokio::test]
async fn correct_credentials_reach_the_admin_page() {
    let app = TestApp::spawn().await;
    let header = BasicCredentials::encode(ADMIN_USER, ADMIN_PASSWORD);

    let response = app.send(admin_request(Some(&header))).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "admin main");
}

#[tokio::test]
async fn wrong_credentials_are_rejected_every_time() {
    let app = TestApp::spawn().await;

    for header in [
        BasicCredentials::encode(ADMIN_USER, "not-the-password"),
        BasicCredentials::encode("someone", ADMIN_PASSWORD),
        "Basic ???".to_owned(),
        "Bearer token".to_owned(),
    ] {
        let response = app.send(admin_request(Some(&header))).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{header}");
    }

    // no session: a good request does not unlock the next bare one
    let good = BasicCredentials::encode(ADMIN_USER, ADMIN_PASSWORD);
    assert_eq!(app.send(admin_request(Some(&good))).await.status, StatusCode::OK);
    assert_eq!(app.send(admin_request(None)).await.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn the_rest_of_the_site_needs_no_credentials() {
    let app = TestApp::spawn().await;
    assert_eq!(app.get("/board/list").await.status, StatusCode::OK);
}
