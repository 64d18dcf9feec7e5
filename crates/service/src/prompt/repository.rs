use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use models::system_prompt::{self, PromptKind};
use models::Language;

use crate::errors::ServiceError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GetSystemPromptOptions {
    pub language: Language,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GetSystemAddressGenerationPromptOptions {
    pub language: Language,
}

/// Storage collaborator for prompt text.
#[async_trait]
pub trait PromptRepository: Send + Sync {
    async fn get_system_prompt(&self, opts: GetSystemPromptOptions) -> Result<String, ServiceError>;
    async fn get_system_address_generation_prompt(
        &self,
        opts: GetSystemAddressGenerationPromptOptions,
    ) -> Result<String, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmPromptRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmPromptRepository {
    async fn find_content(&self, kind: PromptKind, language: Language) -> Result<String, ServiceError> {
        system_prompt::Entity::find()
            .filter(system_prompt::Column::Kind.eq(kind))
            .filter(system_prompt::Column::Language.eq(language))
            .one(&self.db)
            .await?
            .map(|row| row.content)
            .ok_or_else(|| ServiceError::not_found("system prompt"))
    }
}

#[async_trait]
impl PromptRepository for SeaOrmPromptRepository {
    async fn get_system_prompt(&self, opts: GetSystemPromptOptions) -> Result<String, ServiceError> {
        self.find_content(PromptKind::System, opts.language).await
    }

    async fn get_system_address_generation_prompt(
        &self,
        opts: GetSystemAddressGenerationPromptOptions,
    ) -> Result<String, ServiceError> {
        self.find_content(PromptKind::AddressGeneration, opts.language).await
    }
}

/// Hand-written in-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockPromptRepository {
        prompts: Mutex<HashMap<(PromptKind, Language), String>>,
        failure: Mutex<Option<String>>,
        calls: Mutex<Vec<(PromptKind, Language)>>,
    }

    impl MockPromptRepository {
        pub fn with_prompt(self, kind: PromptKind, language: Language, text: &str) -> Self {
            self.prompts.lock().unwrap().insert((kind, language), text.to_string());
            self
        }

        pub fn fail_with(&self, message: &str) {
            *self.failure.lock().unwrap() = Some(message.to_string());
        }

        pub fn calls(&self) -> Vec<(PromptKind, Language)> {
            self.calls.lock().unwrap().clone()
        }

        fn lookup(&self, kind: PromptKind, language: Language) -> Result<String, ServiceError> {
            self.calls.lock().unwrap().push((kind, language));
            if let Some(msg) = self.failure.lock().unwrap().as_ref() {
                return Err(ServiceError::Db(msg.clone()));
            }
            self.prompts
                .lock()
                .unwrap()
                .get(&(kind, language))
                .cloned()
                .ok_or_else(|| ServiceError::not_found("system prompt"))
        }
    }

    #[async_trait]
    impl PromptRepository for MockPromptRepository {
        async fn get_system_prompt(&self, opts: GetSystemPromptOptions) -> Result<String, ServiceError> {
            self.lookup(PromptKind::System, opts.language)
        }

        async fn get_system_address_generation_prompt(
            &self,
            opts: GetSystemAddressGenerationPromptOptions,
        ) -> Result<String, ServiceError> {
            self.lookup(PromptKind::AddressGeneration, opts.language)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{db_tests_enabled, get_db};
    use sea_orm::{ActiveModelTrait, Set};

    #[tokio::test]
    async fn seaorm_repository_selects_prompt_by_kind() -> Result<(), anyhow::Error> {
        if !db_tests_enabled() { return Ok(()); }
        let db = get_db().await?;

        system_prompt::Entity::delete_many()
            .filter(system_prompt::Column::Language.eq(Language::En))
            .exec(&db)
            .await?;
        for (kind, content) in [(PromptKind::System, "be helpful"), (PromptKind::AddressGeneration, "make addresses")] {
            system_prompt::ActiveModel {
                id: Set(uuid::Uuid::new_v4()),
                kind: Set(kind),
                language: Set(Language::En),
                content: Set(content.into()),
                updated_at: Set(chrono::Utc::now().into()),
            }
            .insert(&db)
            .await?;
        }

        let repo = SeaOrmPromptRepository { db: db.clone() };
        assert_eq!(repo.get_system_prompt(GetSystemPromptOptions { language: Language::En }).await?, "be helpful");
        assert_eq!(
            repo.get_system_address_generation_prompt(GetSystemAddressGenerationPromptOptions { language: Language::En })
                .await?,
            "make addresses"
        );

        system_prompt::Entity::delete_many()
            .filter(system_prompt::Column::Language.eq(Language::En))
            .exec(&db)
            .await?;
        let missing = repo.get_system_prompt(GetSystemPromptOptions { language: Language::En }).await;
        assert!(matches!(missing, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
