use std::collections::BTreeMap;

/// Original ingredient spelling -> healthier alternative.
pub type HealthierSwaps = BTreeMap<String, String>;

/// One suggestion shared by a group of normalized aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstitutionRule {
    pub aliases: &'static [&'static str],
    pub suggestion: &'static str,
}

impl SubstitutionRule {
    pub fn matches(&self, normalized: &str) -> bool {
        self.aliases.contains(&normalized)
    }
}

/// Trims surrounding whitespace and lowercases an ingredient name.
pub fn normalize_ingredient(ingredient: &str) -> String {
    ingredient.trim().to_lowercase()
}
