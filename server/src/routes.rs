//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server only hosts the front end: Leptos SSR for the app routes, the
//! compiled WASM/CSS bundle under `/pkg`, and a health probe. All campus data
//! comes from the separate REST API the browser talks to directly.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::config::LeptosOptions;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Routes that do not depend on the Leptos build.
fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full application router: SSR pages, static bundle and health probe.
pub fn app(options: LeptosOptions) -> Router {
    let routes = generate_route_list(campus_client::app::App);
    let pkg_dir = PathBuf::from(options.site_root.as_ref()).join(options.site_pkg_dir.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&options, routes, {
            let opts = options.clone();
            move || campus_client::app::shell(opts.clone())
        })
        .with_state(options);

    base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
