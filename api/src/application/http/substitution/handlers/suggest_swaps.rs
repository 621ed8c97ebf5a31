use axum::extract::State;
use serde::{Deserialize, Serialize};
use smart_grocery_core::domain::substitution::{entities::HealthierSwaps, ports::SubstitutionService};
use utoipa::ToSchema;

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ErrorBody, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    substitution::validators::SuggestSwapsValidator,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SuggestSwapsResponse {
    #[schema(value_type = Object, example = json!({"White Rice": "brown rice or quinoa"}))]
    pub healthier_swaps: HealthierSwaps,
}

#[utoipa::path(
    post,
    path = "",
    tag = "substitution",
    summary = "Suggest healthier swaps",
    description = "Looks up healthier alternatives for the given ingredients. Unknown ingredients are omitted.",
    responses(
        (status = 200, body = SuggestSwapsResponse),
        (status = 400, description = "Malformed body", body = ErrorBody)
    ),
    request_body = SuggestSwapsValidator
)]
pub async fn suggest_swaps(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SuggestSwapsValidator>,
) -> Result<Response<SuggestSwapsResponse>, ApiError> {
    let healthier_swaps = state.service.suggest_swaps(payload.ingredients);

    Ok(Response::OK(SuggestSwapsResponse { healthier_swaps }))
}
