use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SuggestSwapsValidator {
    #[schema(example = json!(["White Rice", "Butter", "Asparagus"]))]
    #[validate(length(max = 500, message = "at most 500 ingredients per request"))]
    pub ingredients: Vec<String>,
}
