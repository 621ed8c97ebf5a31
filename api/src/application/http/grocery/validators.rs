use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct GenerateGroceryListValidator {
    #[schema(example = json!(["pasta", "salad"]))]
    #[validate(length(max = 50, message = "at most 50 meals per request"))]
    pub meals: Vec<String>,
}
