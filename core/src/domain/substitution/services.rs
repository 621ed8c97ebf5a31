use crate::domain::{
    common::services::Service,
    grocery::ports::LLMClient,
    substitution::{entities::HealthierSwaps, ports::SubstitutionService},
};

impl<LLM> SubstitutionService for Service<LLM>
where
    LLM: LLMClient,
{
    fn suggest_swaps(&self, ingredients: Vec<String>) -> HealthierSwaps {
        self.substitution_table.suggest_swaps(&ingredients)
    }
}
