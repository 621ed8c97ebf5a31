use crate::{
    domain::common::{SmartGroceryConfig, services::Service},
    infrastructure::llm::GeminiLLMClient,
};

pub type SmartGroceryService = Service<GeminiLLMClient>;

/// Builds the production service, refusing to start without a credential.
pub fn create_service(config: SmartGroceryConfig) -> Result<SmartGroceryService, anyhow::Error> {
    if !config.llm.has_credential() {
        anyhow::bail!("GEMINI_API_KEY environment variable is empty or not set");
    }

    let llm_client = GeminiLLMClient::new(&config.llm)?;

    Ok(Service::new(llm_client, config.llm))
}
