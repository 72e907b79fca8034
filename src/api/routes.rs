/*
 * Responsibility
 * - URL 構造を定義 (exact path match のみ)
 * - /, /healthz, /readyz
 * - それ以外は axum の default fallback (404, empty body)
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::handlers::{
    health::{healthz, readyz},
    root::root,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}
