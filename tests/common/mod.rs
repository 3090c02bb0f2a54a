use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, routing::get, Router};
use reqwest::Client;
use tokio::net::TcpListener;

use menu_rs::handlers::{
    admin, api, cors_middleware, health_check, metrics_handler, request_validation_middleware,
    security_headers_middleware,
};
use menu_rs::observability::{observability_middleware, Metrics};
use menu_rs::repositories::InMemoryMenuRepository;
use menu_rs::services::{CatalogService, MenuAssembler};

pub struct TestEnvironment {
    pub client: Client,
    pub base_url: String,
}

/// Build the real application over a fresh, empty in-memory store
fn create_test_app() -> Router {
    let metrics = Arc::new(Metrics::new().expect("Failed to create metrics"));
    let metrics_for_middleware = metrics.clone();
    let metrics_for_admin = metrics.clone();

    let repository = Arc::new(InMemoryMenuRepository::new());
    let catalog_service = Arc::new(CatalogService::new(repository.clone()));
    let menu_assembler = Arc::new(MenuAssembler::new(repository));

    Router::new()
        .route("/health/status", get(health_check))
        .route("/metrics", get(metrics_handler))
        .with_state(metrics)
        .merge(api::create_api_router(
            catalog_service.clone(),
            menu_assembler,
        ))
        .merge(admin::create_admin_router(catalog_service, metrics_for_admin))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(cors_middleware))
        .layer(middleware::from_fn(request_validation_middleware))
        .layer(middleware::from_fn(move |req, next| {
            observability_middleware(metrics_for_middleware.clone(), req, next)
        }))
}

impl TestEnvironment {
    pub async fn new() -> Self {
        let app = create_test_app();

        // Start server on an ephemeral port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind listener");
        let addr = listener.local_addr().expect("Failed to get local address");
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Failed to serve app");
        });

        // Wait for server to start
        tokio::time::sleep(Duration::from_millis(100)).await;

        let client = Client::new();

        Self { client, base_url }
    }

    pub async fn seed_test_data(&self) {
        let response = self
            .client
            .post(format!("{}/api/admin/seed", self.base_url))
            .send()
            .await
            .expect("Failed to seed test data");

        assert_eq!(response.status().as_u16(), 200);
    }
}
