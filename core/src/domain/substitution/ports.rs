use crate::domain::substitution::entities::HealthierSwaps;

/// Service trait for ingredient substitution lookups
#[cfg_attr(test, mockall::automock)]
pub trait SubstitutionService: Send + Sync {
    fn suggest_swaps(&self, ingredients: Vec<String>) -> HealthierSwaps;
}
