use crate::application::http::{
    grocery::router::GroceryApiDoc, health::HealthApiDoc,
    substitution::router::SubstitutionApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Smart Grocery API"
    ),
    nest(
        (path = "/grocery-list", api = GroceryApiDoc),
        (path = "/healthier-swaps", api = SubstitutionApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
