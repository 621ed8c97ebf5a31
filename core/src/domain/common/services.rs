use crate::domain::{
    common::LLMConfig, grocery::ports::LLMClient, substitution::table::SubstitutionTable,
};

/// Application service shared by every domain service trait.
///
/// It owns the model client and its configuration; the substitution table is
/// a `'static` value so clones are cheap.
#[derive(Clone, Debug)]
pub struct Service<LLM>
where
    LLM: LLMClient,
{
    pub(crate) llm_client: LLM,
    pub(crate) llm_config: LLMConfig,
    pub(crate) substitution_table: SubstitutionTable,
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    pub fn new(llm_client: LLM, llm_config: LLMConfig) -> Self {
        Self {
            llm_client,
            llm_config,
            substitution_table: SubstitutionTable::standard(),
        }
    }
}
