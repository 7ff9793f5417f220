#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use ebpro_api::config::{LogFormat, ServerConfig};
use ebpro_api::router::build_app_router;
use ebpro_api::state::AppState;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        log_format: LogFormat::Text,
    }
}

/// Build the full application router, with the production middleware stack,
/// on top of the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

/// Send a GET request through the router without a TCP listener.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body into a UTF-8 string.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Insert one `tbl_menu` row directly; the API itself has no write path.
pub async fn insert_menu(
    pool: &PgPool,
    code: i32,
    name: &str,
    price: &str,
    category: &str,
    orderable: &str,
) {
    sqlx::query(
        "INSERT INTO tbl_menu (menu_code, menu_name, menu_price, category_code, orderable_status)
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(code)
    .bind(name)
    .bind(price)
    .bind(category)
    .bind(orderable)
    .execute(pool)
    .await
    .unwrap();
}
