use super::mocks::RecordingScreen;
use docquery::{
    api::{HttpDocumentApi, SelectedFile},
    config::BackendConfig,
    page::Page,
};
use std::sync::Arc;
use tempfile::TempDir;
use wiremock::{MockServer, Request};

/// Backend config pointing at a running mock server
pub fn backend_config(server: &MockServer) -> BackendConfig {
    BackendConfig {
        base_url: server.uri(),
        ..BackendConfig::default()
    }
}

pub fn create_api(server: &MockServer) -> HttpDocumentApi {
    HttpDocumentApi::new(&backend_config(server)).expect("mock server URI is valid")
}

/// Page wired to the mock server, plus the screen it writes to
pub fn create_page(server: &MockServer) -> (Page, Arc<RecordingScreen>) {
    let screen = Arc::new(RecordingScreen::new());
    let page = Page::new(Arc::new(create_api(server)), screen.clone());
    (page, screen)
}

/// Write a file into a fresh temp dir and load it as an upload
pub async fn create_upload(name: &str, contents: &[u8]) -> (TempDir, SelectedFile) {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join(name);
    tokio::fs::write(&path, contents).await.unwrap();
    let file = SelectedFile::from_path(&path).await.unwrap();
    (dir, file)
}

pub async fn received(server: &MockServer) -> Vec<Request> {
    server
        .received_requests()
        .await
        .expect("request recording is enabled")
}

pub fn header<'a>(request: &'a Request, name: &str) -> &'a str {
    request
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}
