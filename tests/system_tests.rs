
use reqwest::StatusCode;
use serde_json::Value;
use test_utils::*;

#[actix_rt::test]
async fn index_lists_the_endpoints() {
    let app = TestApp::spawn().await;

    let response = app.get("/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["endpoints"]["projetos"], "/api/projetos");
    assert_eq!(body["endpoints"]["visitas"], "/api/visitas");
}

#[actix_rt::test]
async fn health_reports_ok() {
    let app = TestApp::spawn().await;

    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["message"], "Portfolio API is running");
    assert_eq!(body["database"], "OK");
}

#[actix_rt::test]
async fn health_stays_up_when_gateway_is_down() {
    let app = TestApp::spawn_with(MemoryGateway::offline()).await;

    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["database"], "Unavailable");
}

#[actix_rt::test]
async fn unknown_route_is_json_not_found() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/nada").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Endpoint not found");
}

#[actix_rt::test]
async fn trailing_slash_is_normalized() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/projetos/").await;

    assert_eq!(response.status(), StatusCode::OK);
}
