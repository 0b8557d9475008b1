use super::*;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.host.to_string(), "127.0.0.1");
    assert_eq!(config.port, 5173);
    assert_eq!(config.verbosity, 1);
}

#[test]
fn test_default_filter_levels() {
    assert_eq!(default_filter(0), "notes_landing=warn,tower_http=warn");
    assert_eq!(default_filter(1), "notes_landing=info,tower_http=info");
    assert_eq!(default_filter(2), "notes_landing=debug,tower_http=debug");
    assert_eq!(default_filter(7), "notes_landing=trace,tower_http=trace");
}

#[test]
fn test_init_tracing_twice_does_not_panic() {
    init_tracing(0);
    init_tracing(2);
    init_tracing_with_filter("notes_landing=error".to_string());
}

#[tokio::test]
async fn test_bind_conflict_is_reported() {
    let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = taken.local_addr().unwrap().port();

    let err = run(Config {
        host: "127.0.0.1".parse().unwrap(),
        port,
        verbosity: 0,
    })
    .await
    .unwrap_err();

    assert!(matches!(err, ApiError::Bind { .. }));
    assert!(err.to_string().contains(&port.to_string()));
}
