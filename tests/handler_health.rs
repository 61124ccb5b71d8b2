mod common;

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use employee_directory::routes::app_router;
use sqlx::PgPool;

#[sqlx::test]
async fn test_health_endpoint_success(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(ServiceExt::<Request>::into_make_service(app_router(state))).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["checks"]["cache"]["status"], "ok");
    assert_eq!(json["checks"]["cache"]["message"], "Cache disabled");
}

#[sqlx::test]
async fn test_health_endpoint_structure(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(ServiceExt::<Request>::into_make_service(app_router(state))).unwrap();

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json["checks"].get("database").is_some());
    assert!(json["checks"].get("cache").is_some());
}

#[sqlx::test]
async fn test_trailing_slash_is_normalized(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(ServiceExt::<Request>::into_make_service(app_router(state))).unwrap();

    let response = server.get("/Employees/").await;

    response.assert_status_ok();
}
