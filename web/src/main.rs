//! Server entry-point – Axum + Leptos SSR.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    // ── Tracing ──────────────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vanmitra_web=info,vanmitra_common=info,tower_http=info".into()),
        )
        .init();

    if let Err(e) = serve().await {
        tracing::error!("{e:#}");
        std::process::exit(1);
    }
}

#[cfg(feature = "ssr")]
async fn serve() -> anyhow::Result<()> {
    use anyhow::Context;
    use axum::Router;
    use leptos::config::get_configuration;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::trace::TraceLayer;

    use vanmitra_web::app::{shell, App};
    use vanmitra_web::server;

    // ── Bundled data & config ────────────────────────────────────────────
    server::check_datasets().context("Refusing to start")?;
    if let Some(config) = server::check_config_override()? {
        tracing::info!(zoom = config.map.zoom, "Config override is valid");
    }

    // ── Leptos configuration ─────────────────────────────────────────────
    let conf = get_configuration(None).context("Cannot read Leptos configuration")?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    // ── Routes ───────────────────────────────────────────────────────────
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        // Static assets (WASM bundle, CSS) with a rendered 404 otherwise
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    tracing::info!("VanMitra listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Cannot bind {addr}"))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // This binary is only built with the `ssr` feature.
    // The WASM entry point is `lib::hydrate()`.
}
