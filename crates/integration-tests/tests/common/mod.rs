//! Shared fixtures: a full router over an in-memory SQLite repository.

#![allow(dead_code)]

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use api_adapters::{router, AppState};
use auth_adapters::{
    argon2::{Algorithm, Argon2, Params, Version},
    hash_password_with, HashedCredentialTable,
};
use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use domains::{BoardRepository, CredentialVerifier, NewBoard};
use storage_adapters::SqliteBoardRepository;
use tower::ServiceExt;

pub const ADMIN_USER: &str = "test";
pub const ADMIN_PASSWORD: &str = "test";

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn location(&self) -> &str {
        self.headers
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
    }

    pub fn content_type(&self) -> &str {
        self.headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
    }
}

pub struct TestApp {
    pub router: Router,
    pub repo: Arc<SqliteBoardRepository>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let repo = Arc::new(
            SqliteBoardRepository::in_memory()
                .await
                .expect("in-memory SQLite should open"),
        );
        let router = app_router(repo.clone(), Arc::new(admin_table()));
        Self { router, repo }
    }

    /// Inserts `count` boards directly; ids are 1..=count.
    pub async fn seed(&self, count: usize) {
        for n in 1..=count {
            let board = NewBoard::new(format!("seeded {n}"), format!("body {n}")).unwrap();
            self.repo.insert(&board).await.unwrap();
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_form(&self, uri: &str, form: &str) -> TestResponse {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_owned()))
            .unwrap();
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        send(&self.router, request).await
    }
}

pub fn app_router(
    repo: Arc<dyn BoardRepository>,
    credentials: Arc<dyn CredentialVerifier>,
) -> Router {
    router(AppState::new(repo, credentials), static_dir())
}

pub async fn send(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    TestResponse {
        status,
        headers,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    }
}

/// The repository's `static/` directory.
pub fn static_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../static")
}

/// Cheap argon2 parameters keep the admin tests fast.
pub fn admin_table() -> HashedCredentialTable {
    let params = Params::new(1024, 1, 1, None).unwrap();
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let hash = hash_password_with(&argon2, ADMIN_PASSWORD).unwrap();
    HashedCredentialTable::new()
        .with_user(ADMIN_USER, hash)
        .unwrap()
}
