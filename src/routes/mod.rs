//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the Leptos landing page at `/`, serves the hydration bundle under
//! `/pkg` and public files (the logo) under `/assets`, and answers
//! `/healthz`. Lead submissions never touch this server: the browser posts
//! them straight to the hosted form service.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, ServerConfig};

/// Build the full application router.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(config: &ServerConfig) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = resolve_site_root(config.site_root.as_deref(), leptos_options.site_root.as_ref());
    tracing::debug!(site_root = %site_root.display(), "serving leptos bundle");

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .nest_service("/assets", ServeDir::new(&config.assets_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Configured override, else the Leptos `site_root`.
fn resolve_site_root(override_root: Option<&Path>, leptos_root: &str) -> PathBuf {
    override_root.map_or_else(|| PathBuf::from(leptos_root), Path::to_path_buf)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
