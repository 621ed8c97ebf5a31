use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::substitution::entities::HealthierSwaps;

/// Category name -> ingredients, as returned by the model.
pub type GroceryList = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GroceryListResult {
    #[schema(value_type = Object, example = json!({"Pantry": ["Pasta", "Olive Oil"]}))]
    pub grocery_list: GroceryList,
    #[schema(value_type = Object, example = json!({"Pasta": "whole grain pasta or zucchini noodles"}))]
    pub healthier_swaps: HealthierSwaps,
}

/// Every distinct ingredient of a grocery list, in category order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientSet {
    items: Vec<String>,
}

impl IngredientSet {
    pub fn from_grocery_list(grocery_list: &GroceryList) -> Self {
        let mut seen = HashSet::new();
        let items = grocery_list
            .values()
            .flatten()
            .filter(|ingredient| seen.insert(ingredient.as_str()))
            .cloned()
            .collect();

        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

/// One alternative answer produced by the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub parts: Vec<ContentPart>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPart {
    Text(String),
    /// Non-text payload such as inline data or a function call, by kind.
    Other(String),
}

impl Candidate {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![ContentPart::Text(text.into())],
        }
    }
}
