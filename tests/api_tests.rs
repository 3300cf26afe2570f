use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["service"], "glassnou-api");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = create_test_app();
    let response = app
        .oneshot(Request::builder().uri("/api/desconocido").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_method_returns_405() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/quotes")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // El endpoint de presupuestos solo admite GET y POST
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// Función helper para crear la app de test con la misma forma de rutas
// que el servicio (sin base de datos)
fn create_test_app() -> Router {
    Router::new()
        .route(
            "/health",
            get(|| async {
                Json(json!({
                    "service": "glassnou-api",
                    "status": "ok",
                }))
            }),
        )
        .route("/api/quotes", get(|| async { Json(json!([])) }))
        .route(
            "/api/quotes",
            post(|| async {
                Json(json!({
                    "id": 1,
                    "name": "Jordi",
                    "phone": "600123456",
                    "plate": null,
                    "comment": null,
                }))
            }),
        )
}
