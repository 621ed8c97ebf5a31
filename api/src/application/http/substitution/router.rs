use super::handlers::suggest_swaps::{__path_suggest_swaps, suggest_swaps};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(suggest_swaps))]
pub struct SubstitutionApiDoc;

pub fn substitution_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/healthier-swaps", state.args.server.root_path),
        post(suggest_swaps),
    )
}
