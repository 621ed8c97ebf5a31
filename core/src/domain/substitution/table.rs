use crate::domain::substitution::entities::{
    HealthierSwaps, SubstitutionRule, normalize_ingredient,
};

/// Healthier alternatives keyed by normalized alias.
pub static SUBSTITUTION_RULES: &[SubstitutionRule] = &[
    // Flours and grains
    SubstitutionRule {
        aliases: &["flour", "white flour", "all-purpose flour"],
        suggestion: "almond flour or whole wheat flour",
    },
    SubstitutionRule {
        aliases: &["white rice"],
        suggestion: "brown rice or quinoa",
    },
    SubstitutionRule {
        aliases: &["pasta", "white pasta"],
        suggestion: "whole grain pasta or zucchini noodles",
    },
    SubstitutionRule {
        aliases: &["bread", "white bread"],
        suggestion: "whole grain bread or ezekiel bread",
    },
    SubstitutionRule {
        aliases: &["breadcrumbs"],
        suggestion: "almond meal or ground flaxseed",
    },
    // Dairy
    SubstitutionRule {
        aliases: &["milk", "whole milk"],
        suggestion: "oat milk or almond milk",
    },
    SubstitutionRule {
        aliases: &["cream", "heavy cream"],
        suggestion: "coconut cream or cashew cream",
    },
    SubstitutionRule {
        aliases: &["sour cream"],
        suggestion: "greek yogurt",
    },
    SubstitutionRule {
        aliases: &["butter"],
        suggestion: "ghee or coconut oil",
    },
    SubstitutionRule {
        aliases: &["cheese", "cheddar cheese"],
        suggestion: "nutritional yeast or cashew cheese",
    },
    SubstitutionRule {
        aliases: &["ice cream"],
        suggestion: "banana nice cream or coconut milk ice cream",
    },
    // Oils and fats
    SubstitutionRule {
        aliases: &["vegetable oil", "canola oil"],
        suggestion: "avocado oil or olive oil",
    },
    SubstitutionRule {
        aliases: &["olive oil"],
        suggestion: "avocado oil",
    },
    SubstitutionRule {
        aliases: &["margarine"],
        suggestion: "coconut oil or avocado oil spread",
    },
    // Sweeteners
    SubstitutionRule {
        aliases: &["sugar", "white sugar"],
        suggestion: "maple syrup, honey, or monk fruit sweetener",
    },
    SubstitutionRule {
        aliases: &["brown sugar"],
        suggestion: "coconut sugar",
    },
    SubstitutionRule {
        aliases: &["corn syrup"],
        suggestion: "maple syrup or date syrup",
    },
    // Proteins
    SubstitutionRule {
        aliases: &["ground beef"],
        suggestion: "lean ground turkey or plant-based ground",
    },
    SubstitutionRule {
        aliases: &["bacon"],
        suggestion: "turkey bacon or tempeh bacon",
    },
    SubstitutionRule {
        aliases: &["chicken", "chicken breast"],
        suggestion: "organic free-range chicken",
    },
    SubstitutionRule {
        aliases: &["tuna", "canned tuna"],
        suggestion: "wild-caught salmon",
    },
    // Snacks and processed foods
    SubstitutionRule {
        aliases: &["potato chips"],
        suggestion: "baked vegetable chips or air-popped popcorn",
    },
    SubstitutionRule {
        aliases: &["crackers", "white crackers"],
        suggestion: "whole grain crackers or seed crackers",
    },
    SubstitutionRule {
        aliases: &["chocolate", "milk chocolate"],
        suggestion: "dark chocolate (70%+ cacao)",
    },
    SubstitutionRule {
        aliases: &["candy"],
        suggestion: "dried fruit or dark chocolate",
    },
    // Condiments and sauces
    SubstitutionRule {
        aliases: &["mayonnaise", "mayo"],
        suggestion: "avocado-based mayo or greek yogurt",
    },
    SubstitutionRule {
        aliases: &["ketchup"],
        suggestion: "tomato paste or sugar-free ketchup",
    },
    SubstitutionRule {
        aliases: &["ranch dressing"],
        suggestion: "greek yogurt-based dressing",
    },
    SubstitutionRule {
        aliases: &["soy sauce"],
        suggestion: "coconut aminos or tamari",
    },
    SubstitutionRule {
        aliases: &["salt", "table salt"],
        suggestion: "himalayan pink salt or sea salt",
    },
    // Baking
    SubstitutionRule {
        aliases: &["baking powder"],
        suggestion: "aluminum-free baking powder",
    },
    SubstitutionRule {
        aliases: &["chocolate chips"],
        suggestion: "cacao nibs or dark chocolate chips",
    },
    // Beverages
    SubstitutionRule {
        aliases: &["soda", "cola"],
        suggestion: "sparkling water with fresh fruit",
    },
    SubstitutionRule {
        aliases: &["fruit juice"],
        suggestion: "whole fruits or vegetable juice",
    },
    SubstitutionRule {
        aliases: &["coffee creamer"],
        suggestion: "almond milk or coconut milk",
    },
];

/// Read-only view over a set of substitution rules.
#[derive(Debug, Clone, Copy)]
pub struct SubstitutionTable {
    rules: &'static [SubstitutionRule],
}

impl SubstitutionTable {
    pub const fn standard() -> Self {
        Self {
            rules: SUBSTITUTION_RULES,
        }
    }

    pub fn lookup(&self, ingredient: &str) -> Option<&'static SubstitutionRule> {
        let normalized = normalize_ingredient(ingredient);
        self.rules.iter().find(|rule| rule.matches(&normalized))
    }

    /// Maps every ingredient with a known alternative, keyed by its original
    /// spelling. Unknown ingredients are skipped.
    pub fn suggest_swaps<I, S>(&self, ingredients: I) -> HealthierSwaps
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ingredients
            .into_iter()
            .filter_map(|ingredient| {
                let ingredient = ingredient.as_ref();
                self.lookup(ingredient)
                    .map(|rule| (ingredient.to_string(), rule.suggestion.to_string()))
            })
            .collect()
    }
}
