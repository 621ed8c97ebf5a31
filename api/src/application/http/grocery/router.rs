use super::handlers::generate_grocery_list::{__path_generate_grocery_list, generate_grocery_list};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(generate_grocery_list))]
pub struct GroceryApiDoc;

pub fn grocery_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/grocery-list", state.args.server.root_path),
        post(generate_grocery_list),
    )
}
