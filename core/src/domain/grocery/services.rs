use tracing::{debug, info};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    grocery::{
        entities::{GroceryListResult, IngredientSet},
        ports::{GroceryListService, LLMClient},
        prompt::build_grocery_prompt,
        sanitizer::{first_text_part, parse_grocery_list},
        value_objects::GenerateGroceryListInput,
    },
};

impl<LLM> GroceryListService for Service<LLM>
where
    LLM: LLMClient,
{
    async fn generate_grocery_list(
        &self,
        input: GenerateGroceryListInput,
    ) -> Result<GroceryListResult, CoreError> {
        // 1. Validate input and credential before any upstream call
        if input.meals.is_empty() {
            return Err(CoreError::EmptyInput);
        }

        if !self.llm_config.has_credential() {
            return Err(CoreError::MissingCredential);
        }

        // 2. Call LLM
        let prompt = build_grocery_prompt(&input.meals);
        debug!("Sending prompt to Gemini: {}", prompt);

        let candidates = self.llm_client.generate_content(prompt).await?;
        let raw_response = first_text_part(&candidates)?;
        debug!("Raw response from Gemini: {}", raw_response);

        // 3. Sanitize and parse
        let grocery_list = parse_grocery_list(raw_response)?;

        // 4. Look up healthier swaps
        let ingredients = IngredientSet::from_grocery_list(&grocery_list);
        let healthier_swaps = self.substitution_table.suggest_swaps(ingredients.iter());

        info!(
            categories = grocery_list.len(),
            ingredients = ingredients.len(),
            swaps = healthier_swaps.len(),
            "grocery list generated"
        );

        Ok(GroceryListResult {
            grocery_list,
            healthier_swaps,
        })
    }
}
