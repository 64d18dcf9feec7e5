use std::sync::Arc;

use tracing::instrument;

use models::Language;

use crate::errors::ServiceError;
use crate::prompt::repository::{
    GetSystemAddressGenerationPromptOptions, GetSystemPromptOptions, PromptRepository,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GetSystemPromptInput {
    pub language: Language,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GetSystemPromptOutput {
    pub prompt: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GetSystemAddressGenerationPromptInput {
    pub language: Language,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GetSystemAddressGenerationPromptOutput {
    pub prompt: String,
}

/// Prompt text lookups. One storage round-trip per call, no fallback text.
pub struct PromptService {
    repo: Arc<dyn PromptRepository>,
}

impl PromptService {
    pub fn new(repo: Arc<dyn PromptRepository>) -> Self { Self { repo } }

    #[instrument(skip(self, input), fields(language = %input.language))]
    pub async fn get_system_prompt(&self, input: GetSystemPromptInput) -> Result<GetSystemPromptOutput, ServiceError> {
        let prompt = self
            .repo
            .get_system_prompt(GetSystemPromptOptions { language: input.language })
            .await
            .map_err(|e| ServiceError::retrieval("failed to get system prompt", e))?;
        Ok(GetSystemPromptOutput { prompt })
    }

    #[instrument(skip(self, input), fields(language = %input.language))]
    pub async fn get_system_address_generation_prompt(
        &self,
        input: GetSystemAddressGenerationPromptInput,
    ) -> Result<GetSystemAddressGenerationPromptOutput, ServiceError> {
        let prompt = self
            .repo
            .get_system_address_generation_prompt(GetSystemAddressGenerationPromptOptions { language: input.language })
            .await
            .map_err(|e| ServiceError::retrieval("failed to get system address generation prompt", e))?;
        Ok(GetSystemAddressGenerationPromptOutput { prompt })
    }
}
