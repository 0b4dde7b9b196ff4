//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the `/api` proxy, legacy page redirects and the
//! health check with Leptos SSR rendering under a single Axum router.

pub mod proxy;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{any, get};
use client::pages::PageKind;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use self::proxy::ProxyState;

/// Static page names the app used before it had a router.
const LEGACY_PAGES: [&str; 4] = ["/index.html", "/register.html", "/login.html", "/dashboard.html"];

/// API proxy, legacy redirects and health check.
pub fn api_routes(proxy: ProxyState) -> Router {
    let mut router = Router::new()
        .route("/api/{*path}", any(proxy::forward))
        .route("/healthz", get(healthz));
    for path in LEGACY_PAGES {
        router = router.route(path, get(redirect_legacy_page));
    }
    router.with_state(proxy)
}

async fn redirect_legacy_page(uri: Uri) -> Response {
    match PageKind::from_path(uri.path()) {
        Some(page) => Redirect::permanent(page.path()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// API routes + Leptos SSR pages + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn app(proxy: ProxyState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(proxy)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}
