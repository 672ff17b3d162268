mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;

use shortly::api::handlers::redirect_handler;
use shortly::domain::repositories::MappingRepository;

async fn redirect_server(pool: &sqlx::SqlitePool) -> TestServer {
    let state = common::test_state(common::test_repository(pool).await);
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_success() {
    let pool = common::test_pool().await;
    let server = redirect_server(&pool).await;

    common::insert_live_mapping(&pool, "go1234", "https://example.com/target").await;

    let response = server.get("/go1234").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let pool = common::test_pool().await;
    let server = redirect_server(&pool).await;

    let response = server.get("/nothere").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_expired_is_not_found_and_deleted() {
    let pool = common::test_pool().await;
    let server = redirect_server(&pool).await;

    common::insert_expired_mapping(&pool, "dead99", "https://example.com").await;

    let response = server.get("/dead99").await;

    response.assert_status_not_found();
    assert!(!common::row_exists(&pool, "dead99").await);
}

#[tokio::test]
async fn test_redirect_increments_clicks() {
    let pool = common::test_pool().await;
    let repo = common::test_repository(&pool).await;
    let state = common::test_state(repo.clone());
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    common::insert_live_mapping(&pool, "click1", "https://example.com").await;

    for _ in 0..3 {
        let response = server.get("/click1").await;
        assert_eq!(response.status_code(), 307);
    }

    let mapping = repo.find_live("click1").await.unwrap().unwrap();
    assert_eq!(mapping.clicks, 3);
}
