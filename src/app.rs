/*
 * Responsibility
 * - tracing / panic hook の初期化
 * - Config読み込み → AppState 生成 → Router 組み立て
 * - Middleware の適用 (request id / trace)
 * - axum::serve() で起動し、SIGINT/SIGTERM で graceful shutdown
 */
use std::{panic, process};

use anyhow::{Context, Result};
use axum::Router;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{api, config::Config, middleware, state::AppState};

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // stderr can be hidden depending on how the pod is launched.
        tracing::error!(?info, "panic");

        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env();

    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        version = %config.version,
        "starting in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let app = build_router(AppState::from_config(&config));

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shut down");
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let router = api::routes().with_state(state);

    middleware::http::apply(router)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received ctrl-c, draining"),
        _ = terminate => tracing::info!("received SIGTERM, draining"),
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::middleware::http::REQUEST_ID_HEADER;

    #[tokio::test]
    async fn version_flows_from_config_to_root() {
        let config = Config::from_lookup(|key| match key {
            "APP_VERSION" => Some("2.3.1".to_string()),
            _ => None,
        });

        let response = build_router(AppState::from_config(&config))
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"Hello from GitOps Demo v2.3.1\n");
    }

    #[tokio::test]
    async fn middleware_adds_no_response_headers() {
        let response = build_router(AppState::new("0.1.0"))
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(REQUEST_ID_HEADER).is_none());
        assert!(response.headers().get("x-app-version").is_none());
    }

    #[tokio::test]
    async fn not_found_passes_through_middleware() {
        let response = build_router(AppState::new("0.1.0"))
            .oneshot(
                Request::builder()
                    .uri("/nonexistent")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }
}
