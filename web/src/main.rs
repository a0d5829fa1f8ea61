//! Server entry-point – Axum + Leptos SSR.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use axum::{body::Body, extract::State, http::Request, Router};
    use leptos::config::get_configuration;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::services::ServeDir;

    use coalwatch_common::config;
    use coalwatch_web::app::{shell, App, AppSettings};
    use coalwatch_web::telemetry;

    // ── Tracing ──────────────────────────────────────────────────────────
    let log_filter = telemetry::init();

    // ── Configuration ────────────────────────────────────────────────────
    let config_path = config::resolve_path(std::env::args().nth(1));
    let config = config::load_or_default(&config_path)?;
    log_filter.apply(&config)?;

    let conf = get_configuration(None).context("Cannot read Leptos configuration")?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.to_string();

    let settings = AppSettings {
        locale: config.locale,
        clock: config.clock(),
        rendered_on: None,
    };
    tracing::info!(
        config = %config_path.display(),
        locale = %settings.locale,
        clock = ?settings.clock,
        "Settings ready"
    );

    // ── Routes ───────────────────────────────────────────────────────────
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(settings.for_request()),
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        // Compiled WASM bundle and stylesheet
        .nest_service("/pkg", ServeDir::new(format!("{site_root}/pkg")))
        // Map image and other static assets
        .fallback({
            let assets_dir = config.assets_dir.clone();
            move |State(options): State<LeptosOptions>, req: Request<Body>| {
                let assets_dir = assets_dir.clone();
                async move { static_file(&options, &assets_dir, req).await }
            }
        })
        .with_state(leptos_options);

    tracing::info!("Coalwatch listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Cannot bind {addr}"))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")
}

/// Fallback: serve a file from the site root or the assets directory,
/// otherwise return 404.
#[cfg(feature = "ssr")]
async fn static_file(
    options: &leptos::prelude::LeptosOptions,
    assets_dir: &std::path::Path,
    req: axum::http::Request<axum::body::Body>,
) -> axum::response::Response {
    use axum::http::{header, StatusCode};
    use axum::response::IntoResponse;

    let uri_path = req.uri().path().trim_start_matches('/');
    if uri_path.split('/').any(|part| part == "..") {
        return (StatusCode::BAD_REQUEST, "Bad Request").into_response();
    }

    let roots = [std::path::PathBuf::from(options.site_root.to_string()), assets_dir.to_path_buf()];
    for root in roots {
        let path = root.join(uri_path);
        if let Ok(meta) = tokio::fs::metadata(&path).await {
            if meta.is_file() {
                if let Ok(bytes) = tokio::fs::read(&path).await {
                    let mime = mime_for(&path.to_string_lossy());
                    return (StatusCode::OK, [(header::CONTENT_TYPE, mime)], bytes).into_response();
                }
            }
        }
    }

    tracing::debug!(path = req.uri().path(), "No static file");
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

#[cfg(feature = "ssr")]
fn mime_for(path: &str) -> &'static str {
    match path.rsplit('.').next().unwrap_or("") {
        "html" => "text/html; charset=utf-8",
        "css" => "text/css",
        "js" => "application/javascript",
        "wasm" => "application/wasm",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "ico" => "image/x-icon",
        _ => "application/octet-stream",
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::mime_for;

    #[test]
    fn test_mime_for() {
        assert_eq!(mime_for("target/site/russia.svg"), "image/svg+xml");
        assert_eq!(mime_for("target/site/pkg/coalwatch-web.wasm"), "application/wasm");
        assert_eq!(mime_for("README"), "application/octet-stream");
    }
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // This binary is only built with the `ssr` feature.
    // The WASM entry point is `lib::hydrate()`.
}
