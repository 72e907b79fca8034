/*
 * Responsibility
 * - GET /healthz (liveness: プロセスが生きている)
 * - GET /readyz  (readiness: トラフィックを受けられる)
 * - 依存がないので常に 200
 */
use axum::http::StatusCode;

pub async fn healthz() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok\n")
}

pub async fn readyz() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ready\n")
}
