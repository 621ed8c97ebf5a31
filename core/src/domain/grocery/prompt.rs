/// Builds the grocery list prompt for the given meals.
///
/// The model is asked for a bare JSON object mapping category names to
/// ingredient arrays; anything else it adds is stripped by the sanitizer.
pub fn build_grocery_prompt(meals: &[String]) -> String {
    format!(
        r#"Given the following meals: {meals}
Generate a detailed grocery shopping list.
Group items by categories like "Vegetables", "Dairy", "Proteins", etc.
Respond ONLY with JSON like:

{{
  "Vegetables": ["Tomatoes", "Onions"],
  "Dairy": ["Cheese", "Milk"],
  "Proteins": ["Chicken Breast", "Eggs"],
  ...
}}

Do NOT include any extra commentary, bullet points, or markdown formatting. Just pure JSON."#,
        meals = meals.join(", ")
    )
}
