use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    grocery::{
        entities::{Candidate, GroceryListResult},
        value_objects::GenerateGroceryListInput,
    },
};

/// LLM Client trait for calling text generation models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Sends one prompt and returns every candidate the model produced.
    fn generate_content(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<Vec<Candidate>, CoreError>> + Send;
}

/// Service trait for grocery list generation
#[cfg_attr(test, mockall::automock)]
pub trait GroceryListService: Send + Sync {
    fn generate_grocery_list(
        &self,
        input: GenerateGroceryListInput,
    ) -> impl Future<Output = Result<GroceryListResult, CoreError>> + Send;
}
