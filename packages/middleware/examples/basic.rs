//! Basic example of driving the title through route changes
//!
//! Run with: cargo run -p doctitle-middleware --example basic

use std::rc::Rc;

use doctitle_core::platform::{viewport_meta, Platform};
use doctitle_core::{MemorySink, RouteTable, TitleSink, ViewHost};
use doctitle_middleware::{init_logging, init_middleware, DoctitleConfig};

fn main() -> doctitle_middleware::Result<()> {
    let config = DoctitleConfig::from_json_str(
        r#"{
            "history": { "history_limit": 50, "pretty_print": true },
            "logging": { "filter": "debug" }
        }"#,
    )?
    .with_env_overrides();
    init_logging(&config.logging);

    let sink = Rc::new(MemorySink::new("My App"));
    let middleware = init_middleware(sink.clone(), config);
    println!("crash reporting enabled: {}", middleware.crash_reporting_enabled());

    if let Some(meta) = viewport_meta(Platform::Web, "Mozilla/5.0 (Linux; Android 14)", 780) {
        println!("viewport shim: {}", meta.to_html());
    }

    let routes = RouteTable::new()
        .exact_route("/", "Home")
        .route("/settings", "Settings")
        .fallback("Not Found");

    {
        let mut host = ViewHost::new(middleware.controller(), routes);
        for path in ["/", "/settings", "/settings/profile", "/nowhere"] {
            host.navigate(path);
            println!("{:<20} -> {}", path, sink.title());
        }
        host.retitle("Not Found (404)");
        println!("{:<20} -> {}", "(retitled)", sink.title());
    }
    println!("{:<20} -> {}", "(all views left)", sink.title());

    // A modal that keeps its title after closing
    let modal = middleware.controller().scoped_retained("Goodbye");
    modal.release()?;
    println!("{:<20} -> {}", "(retained modal)", sink.title());

    if let Some(history) = middleware.history() {
        println!("{}", history.to_json()?);
    }

    Ok(())
}
