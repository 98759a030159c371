use docquery::shell;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

mod common;
use common::test_utils::{create_page, received};

#[tokio::test]
async fn test_shell_submits_each_line_independently() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ingest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Document ingested successfully",
            "doc_id": "a1"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/query"))
        .and(query_param("query", "refund window"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "query_results": ["30 days"] }))
                .set_delay(Duration::from_millis(100)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let doc = dir.path().join("policy.txt");
    tokio::fs::write(&doc, "Refunds within 30 days.").await.unwrap();

    let script = format!(
        "ingest {}\n\nquery refund window\nbogus line\nexit\nquery never sent\n",
        doc.display()
    );
    let (page, screen) = create_page(&server);

    let submitted = shell::run(page, script.as_bytes()).await.unwrap();

    assert_eq!(submitted, 2);
    assert_eq!(received(&server).await.len(), 2);
    assert_eq!(
        screen.alerts(),
        vec!["Document ingested successfully".to_string()]
    );
    assert_eq!(screen.results().as_deref(), Some("[\n  \"30 days\"\n]"));
}

#[tokio::test]
async fn test_shell_missing_file_is_reported_without_request() {
    let server = MockServer::start().await;
    let (page, screen) = create_page(&server);

    let submitted = shell::run(page, &b"ingest /definitely/not/here.pdf\n"[..])
        .await
        .unwrap();

    assert_eq!(submitted, 0);
    assert!(received(&server).await.is_empty());
    let alerts = screen.alerts();
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].starts_with("Error: IO error:"), "got {:?}", alerts);
}

#[tokio::test]
async fn test_shell_unreadable_path_reports_io_error() {
    let server = MockServer::start().await;
    let (page, screen) = create_page(&server);
    let dir = tempfile::tempdir().unwrap();

    let script = format!("ingest {}
", dir.path().display());
    let submitted = shell::run(page, script.as_bytes()).await.unwrap();

    assert_eq!(submitted, 0);
    assert!(received(&server).await.is_empty());
    let alerts = screen.alerts();
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].starts_with("Error: IO error:"), "got {:?}", alerts);
    assert_ne!(alerts[0], "Error: No file selected");
}

#[tokio::test]
async fn test_shell_query_text_is_sent_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/query"))
        .and(query_param("query", " padded  text "))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "query_results": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let (page, screen) = create_page(&server);
    let submitted = shell::run(page, &b"query  padded  text \n"[..])
        .await
        .unwrap();

    assert_eq!(submitted, 1);
    assert_eq!(screen.results().as_deref(), Some("[]"));
}

#[test]
fn test_shell_empty_input_blocking() {
    let runtime_result = tokio_test::block_on(async {
        let server = MockServer::start().await;
        let (page, _screen) = create_page(&server);
        shell::run(page, &b""[..]).await
    });

    assert_eq!(runtime_result.unwrap(), 0);
}
