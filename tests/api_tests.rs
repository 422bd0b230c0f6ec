use portal_router::{AppShell, AppState, config::AppConfig, create_router, models::RouteManifest};
use tokio::net::TcpListener;

#[derive(Debug)]
pub struct TestApp {
    pub address: String,
}

async fn spawn_app() -> TestApp {
    let state = AppState::new(AppConfig::default(), AppShell::default());
    let router = create_router(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    TestApp { address }
}

#[tokio::test]
async fn test_health_check() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("req fail");
    assert!(response.status().is_success());
}

#[tokio::test]
async fn test_navigation_follows_manifest_links() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let manifest: RouteManifest = client
        .get(format!("{}/api/routes", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(manifest.routes.len(), 3);

    // Every published link is a navigable page that boots its own view.
    for route in manifest.routes {
        let response = client
            .get(format!("{}{}", app.address, route.href))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200, "{}", route.href);

        let body = response.text().await.unwrap();
        assert!(body.contains(&format!("data-view=\"{}\"", route.view)));
    }
}

#[tokio::test]
async fn test_unknown_page_is_404() {
    let app = spawn_app().await;
    let response = reqwest::get(format!("{}/does-not-exist", app.address))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_openapi_document_lists_api() {
    let app = spawn_app().await;
    let doc: serde_json::Value = reqwest::get(format!("{}/api-docs/openapi.json", app.address))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(doc["paths"]["/api/routes"].is_object());
    assert!(doc["paths"]["/api/resolve"].is_object());
}
