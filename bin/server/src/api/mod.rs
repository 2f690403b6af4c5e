//! JSON maintenance API, mounted under `/api`.
//!
//! Request bodies are validated before any database access, so malformed
//! requests are rejected without touching the pool.

pub mod areas;
pub mod machines;
pub mod maintenance;

use axum::Json;
use axum::Router;
use axum::routing::{delete, get};
use serde_json::{Value, json};
use sqlx::PgPool;

/// Shared state for API handlers.
#[derive(Clone)]
pub struct ApiState {
    pub pool: PgPool,
}

/// Builds the API router.
///
/// Paths are relative; the caller nests the router under `/api`.
pub fn router<S>(pool: PgPool) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(welcome))
        .route("/areas", get(areas::list_areas).post(areas::create_area))
        .route("/areas/{area_id}", delete(areas::delete_area))
        .route(
            "/areas/{area_id}/machines",
            get(machines::list_machines).post(machines::create_machine),
        )
        .route("/machines/{machine_id}", delete(machines::delete_machine))
        .route(
            "/machines/{machine_id}/maintenance",
            get(maintenance::list_logs).post(maintenance::create_log),
        )
        .route("/maintenance/{log_id}", delete(maintenance::delete_log))
        .with_state(ApiState { pool })
}

/// `GET /api`
async fn welcome() -> Json<Value> {
    Json(json!({ "message": "Welcome to FacilitiPro API" }))
}

/// Parses a request body as JSON, treating anything unparseable as absent.
fn parse_body(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    fn app() -> Router {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://facilitipro@localhost/facilitipro_test")
            .expect("valid database url");
        Router::new().nest("/api", router(pool))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.expect("infallible");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let value = serde_json::from_slice(&bytes).expect("json body");
        (status, value)
    }

    fn post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    #[test]
    fn unparseable_body_is_null() {
        assert_eq!(parse_body(b"not json"), Value::Null);
        assert_eq!(parse_body(b""), Value::Null);
        assert_eq!(parse_body(br#"{"a":1}"#), json!({"a": 1}));
    }

    #[tokio::test]
    async fn welcome_message() {
        let request = Request::builder()
            .uri("/api")
            .body(Body::empty())
            .expect("request");
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Welcome to FacilitiPro API"}));
    }

    #[tokio::test]
    async fn create_area_without_name_is_rejected() {
        let (status, body) = send(post("/api/areas", "{}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Missing 'area_name' field"}));
    }

    #[tokio::test]
    async fn create_area_with_garbage_body_is_rejected() {
        let (status, body) = send(post("/api/areas", "area_name=Roof")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Missing 'area_name' field"}));
    }

    #[tokio::test]
    async fn create_area_with_overlong_name_is_rejected() {
        let body = json!({ "area_name": "x".repeat(101) }).to_string();
        let (status, body) = send(post("/api/areas", &body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"error": "'area_name' must be at most 100 characters"})
        );
    }

    #[tokio::test]
    async fn create_machine_without_asset_number_is_rejected() {
        let (status, body) = send(post(
            "/api/areas/1/machines",
            r#"{"machine_name": "Chiller 2"}"#,
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Missing required fields"}));
    }

    #[tokio::test]
    async fn create_machine_under_invalid_area_id_is_rejected() {
        let (status, body) = send(post(
            "/api/areas/north/machines",
            r#"{"machine_name": "Chiller 2", "asset_number": "CH-002"}"#,
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Invalid area ID"}));
    }

    #[tokio::test]
    async fn create_log_without_hours_is_rejected() {
        let (status, body) = send(post(
            "/api/machines/4/maintenance",
            r#"{"technician_name": "Sam"}"#,
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Missing required fields"}));
    }

    #[tokio::test]
    async fn delete_with_invalid_ids_is_rejected() {
        for (uri, message) in [
            ("/api/areas/zero", "Invalid area ID"),
            ("/api/machines/-3", "Invalid machine ID"),
            ("/api/maintenance/log_x", "Invalid maintenance log ID"),
        ] {
            let request = Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .expect("request");
            let (status, body) = send(request).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body, json!({ "error": message }), "{uri}");
        }
    }
}
