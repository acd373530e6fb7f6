// Integration tests: configuration files and the configured controller

use std::io::Write;
use std::rc::Rc;

use doctitle_core::{MemorySink, MisusePolicy, RouteTable, TitleSink, ViewHost};
use doctitle_middleware::{init_middleware, DoctitleConfig, Error, TitleEventKind};

#[test]
fn test_config_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "controller": {{ "misuse": "ignore", "logging": false }},
            "history": {{ "history_limit": 3 }}
        }}"#
    )
    .unwrap();

    let config = DoctitleConfig::from_json_file(file.path()).unwrap();
    assert_eq!(config.controller.misuse, MisusePolicy::Ignore);
    assert_eq!(config.history.history_limit, 3);
}

#[test]
fn test_missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = DoctitleConfig::from_json_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_view_host_transitions_are_recorded() {
    let sink = Rc::new(MemorySink::new("App"));
    let config = DoctitleConfig::from_json_str(r#"{ "controller": { "logging": false } }"#).unwrap();
    let middleware = init_middleware(sink.clone(), config);
    let routes = RouteTable::new()
        .exact_route("/", "Home")
        .route("/settings", "Settings");

    {
        let mut host = ViewHost::new(middleware.controller(), routes);
        host.navigate("/");
        host.navigate("/settings");
        host.retitle("Settings › Profile");
    }
    assert_eq!(sink.title(), "App");

    let history = middleware.history().unwrap();
    let kinds: Vec<_> = history.history().iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TitleEventKind::Attached,
            TitleEventKind::Restored,
            TitleEventKind::Attached,
            TitleEventKind::Updated,
            TitleEventKind::Restored,
        ]
    );
}

#[test]
fn test_history_limit_from_config_bounds_recorder() {
    let sink = Rc::new(MemorySink::new("App"));
    let config = DoctitleConfig::from_json_str(
        r#"{ "controller": { "logging": false }, "history": { "history_limit": 2 } }"#,
    )
    .unwrap();
    let middleware = init_middleware(sink, config);

    let mut handle = middleware.controller().attach("a", false);
    for title in ["b", "c", "d"] {
        middleware.controller().update(&mut handle, title).unwrap();
    }

    let history = middleware.history().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history.last().unwrap().title, "d");
}
