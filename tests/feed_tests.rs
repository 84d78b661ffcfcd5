// Feed fetch behavior against a mock HTTP server.
use freebites::feed::fetch_events;
use freebites::model::normalize::normalize;
use mockito::Server;

#[tokio::test]
async fn test_fetch_parses_event_array() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/events.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {"title": "Pizza night", "start": "2026-03-04T18:00:00Z", "campus": "Main"},
                {"title": "Bagel hour", "start": "2026-03-05T09:00:00Z"}
            ]"#,
        )
        .create_async()
        .await;

    let raw = fetch_events(&format!("{}/events.json", server.url()))
        .await
        .unwrap();
    assert_eq!(raw.len(), 2);
    assert_eq!(raw[0].title.as_deref(), Some("Pizza night"));
    assert_eq!(raw[0].campus.as_deref(), Some("Main"));

    let events = normalize(raw);
    assert_eq!(events.len(), 2);
}

#[tokio::test]
async fn test_fetch_skips_malformed_entries() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/events.json")
        .with_status(200)
        .with_body(r#"[{"title": "Real"}, "just a string", 42, null]"#)
        .create_async()
        .await;

    let raw = fetch_events(&format!("{}/events.json", server.url()))
        .await
        .unwrap();
    assert_eq!(raw.len(), 1);
    assert_eq!(raw[0].title.as_deref(), Some("Real"));
}

#[tokio::test]
async fn test_fetch_rejects_error_status() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/events.json")
        .with_status(503)
        .create_async()
        .await;

    let err = fetch_events(&format!("{}/events.json", server.url()))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("error status"));
}

#[tokio::test]
async fn test_fetch_rejects_non_array_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/events.json")
        .with_status(200)
        .with_body(r#"{"events": []}"#)
        .create_async()
        .await;

    let err = fetch_events(&format!("{}/events.json", server.url()))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("not a JSON array"));
}

#[tokio::test]
async fn test_fetch_rejects_invalid_json() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/events.json")
        .with_status(200)
        .with_body("<html>maintenance page</html>")
        .create_async()
        .await;

    assert!(fetch_events(&format!("{}/events.json", server.url()))
        .await
        .is_err());
}
