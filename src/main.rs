use axum::{middleware, routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{info, warn};

use menu_rs::{
    handlers::{
        admin, api, cors_middleware, health_check, metrics_handler,
        request_validation_middleware, security_headers_middleware,
    },
    init_observability,
    observability::{observability_middleware, Metrics},
    repositories::InMemoryMenuRepository,
    services::{CatalogService, MenuAssembler},
    Config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first (basic logging only)
    let config = Config::from_environment()?;

    init_observability(
        &config.observability.service_name,
        config.observability.enable_json_logging,
    )?;

    info!("Starting menu-rs service");
    info!(
        "Service: {} v{}",
        config.observability.service_name, config.observability.service_version
    );

    // Initialize metrics
    let metrics = Arc::new(Metrics::new()?);
    info!("Metrics initialized successfully");

    // Initialize the in-memory catalog store and the services over it
    let repository = Arc::new(InMemoryMenuRepository::new());
    let catalog_service = Arc::new(CatalogService::new(repository.clone()));
    let menu_assembler = Arc::new(MenuAssembler::new(repository));
    info!("Services initialized successfully");

    // Seed the sample catalog when starting with an empty store
    if config.catalog.seed_on_startup {
        let categories = catalog_service.list_categories().await?;
        if categories.total_count == 0 {
            match admin::seed_sample_catalog(&catalog_service).await {
                Ok((categories_created, dishes_created)) => {
                    info!(
                        "Seeded catalog with {} categories and {} dishes",
                        categories_created, dishes_created
                    );
                }
                Err(e) => {
                    warn!("Failed to seed catalog: {}, continuing with empty catalog", e);
                }
            }
        } else {
            info!("Catalog already populated, skipping startup seeding");
        }
    }

    // Build the application router
    let app = create_app(metrics, catalog_service, menu_assembler);

    // Create socket address
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Server listening on {}", addr);

    // Create TCP listener
    let listener = TcpListener::bind(addr).await?;

    // Set up graceful shutdown
    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
        info!("Shutdown signal received");
    };

    // Start the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

fn create_app(
    metrics: Arc<Metrics>,
    catalog_service: Arc<CatalogService>,
    menu_assembler: Arc<MenuAssembler>,
) -> Router {
    let metrics_for_middleware = metrics.clone();
    let metrics_for_admin = metrics.clone();

    Router::new()
        // Health and metrics endpoints (with metrics state)
        .route("/health/status", get(health_check))
        .route("/metrics", get(metrics_handler))
        .with_state(metrics)
        // Public read-only endpoints
        .merge(api::create_api_router(
            catalog_service.clone(),
            menu_assembler,
        ))
        // Admin write endpoints
        .merge(admin::create_admin_router(catalog_service, metrics_for_admin))
        // Add middleware layers (order matters - outer to inner)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(cors_middleware))
        .layer(middleware::from_fn(request_validation_middleware))
        .layer(middleware::from_fn(move |req, next| {
            observability_middleware(metrics_for_middleware.clone(), req, next)
        }))
}
