use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::{sync::Arc, time::Instant};
use tracing::{info, Instrument};

use super::Metrics;

/// Middleware for automatic request logging and metrics collection
pub async fn observability_middleware(
    metrics: Arc<Metrics>,
    request: Request,
    next: Next,
) -> Response {
    let start_time = Instant::now();
    let method = request.method().to_string();
    let uri = request.uri().to_string();

    // Use the matched route template for endpoint grouping so per-id
    // requests do not explode the label space
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched_path| matched_path.as_str().to_string())
        .unwrap_or_else(|| uri.clone());

    let span = tracing::info_span!(
        target: "menu_rs::http",
        "request",
        http.method = %method,
        http.route = %endpoint,
        http.url = %uri,
    );

    async {
        metrics.increment_in_flight(&method, &endpoint);

        let response = next.run(request).await;

        let duration = start_time.elapsed();
        let status_code = response.status().as_u16();

        metrics.record_http_request(&method, &endpoint, status_code, duration.as_secs_f64());
        metrics.decrement_in_flight(&method, &endpoint);

        info!(
            method = %method,
            route = %endpoint,
            status = status_code,
            duration_ms = duration.as_millis() as u64,
            "Request completed"
        );

        response
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request as HttpRequest, middleware, routing::get, Router};
    use tower::ServiceExt;

    async fn ok_handler() -> &'static str {
        "ok"
    }

    #[tokio::test]
    async fn test_middleware_records_request_metrics() {
        let metrics = Arc::new(Metrics::new().unwrap());
        let metrics_for_layer = metrics.clone();

        let app = Router::new()
            .route("/api/menu", get(ok_handler))
            .layer(middleware::from_fn(move |req, next| {
                observability_middleware(metrics_for_layer.clone(), req, next)
            }));

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/api/menu")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 200);

        let encoded = metrics.encode().unwrap();
        assert!(encoded.contains("http_requests_total"));
        assert!(encoded.contains("/api/menu"));
    }
}
