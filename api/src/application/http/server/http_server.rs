use std::sync::Arc;

use crate::application::http::{
    grocery::router::grocery_routes, health::health_routes,
    server::{app_state::AppState, openapi::ApiDoc},
    substitution::router::substitution_routes,
};
use crate::args::Args;

use axum::http::header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::{Json, Router, routing::get};
use axum_prometheus::PrometheusMetricLayer;
use smart_grocery_core::{application::create_service, domain::common::SmartGroceryConfig};
use tower_http::cors::CorsLayer;
use tracing::{debug, info_span, warn};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

pub fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = SmartGroceryConfig::from(args.as_ref().clone());
    debug!("LLM configuration: {:?}", config.llm);

    let service = create_service(config)?;

    Ok(AppState::new(args, service))
}

/// Parses the configured origins, skipping invalid entries and `*`.
pub fn cors_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            // Credentialed CORS cannot use a wildcard origin.
            Ok(_) if origin == "*" => {
                warn!("Ignoring wildcard allowed origin");
                None
            }
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid allowed origin {:?}: {}", origin, e);
                None
            }
        })
        .collect()
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = cors_origins(&state.args.server.allowed_origins);
    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allowed_origins)
        .allow_headers([CONTENT_TYPE, CONTENT_LENGTH, ACCEPT])
        .allow_credentials(true);

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);
    let api_docs = openapi.clone();

    let mut router = axum::Router::new()
        .merge(Scalar::with_url(format!("{}/scalar", root_path), openapi))
        .route(&api_docs_url, get(|| async move { Json(api_docs) }))
        .merge(grocery_routes(state.clone()))
        .merge(substitution_routes(state.clone()))
        .merge(health_routes(&root_path));

    if !state.args.server.disable_metrics {
        let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
        router = router
            .route(
                &format!("{}/metrics", root_path),
                get(|| async move { metric_handle.render() }),
            )
            .layer(prometheus_layer);
    }

    let router = router.layer(trace_layer).layer(cors).with_state(state);
    Ok(router)
}
