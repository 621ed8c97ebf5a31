use axum::extract::State;
use smart_grocery_core::domain::grocery::{
    entities::GroceryListResult, ports::GroceryListService,
    value_objects::GenerateGroceryListInput,
};

use crate::application::http::{
    grocery::validators::GenerateGroceryListValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ErrorBody, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "grocery",
    summary = "Generate a grocery list",
    description = "Expands meals into a categorized grocery list using the LLM and suggests healthier swaps for known ingredients.",
    responses(
        (status = 200, body = GroceryListResult),
        (status = 400, description = "Malformed body or no meals", body = ErrorBody),
        (status = 500, description = "Upstream or parsing failure", body = ErrorBody)
    ),
    request_body = GenerateGroceryListValidator
)]
pub async fn generate_grocery_list(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateGroceryListValidator>,
) -> Result<Response<GroceryListResult>, ApiError> {
    let result = state
        .service
        .generate_grocery_list(GenerateGroceryListInput {
            meals: payload.meals,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}
