use async_trait::async_trait;
use sea_orm::sea_query::{extension::postgres::PgBinOper, Expr};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use models::{address, Language};

use crate::errors::ServiceError;

/// Filter for a listing. `tags` empty means no tag filtering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GetAllAddressesOptions {
    pub language: Language,
    pub tags: Vec<String>,
    pub limit: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GetAddressByIdOptions {
    pub language: Language,
    pub address_id: String,
}

/// Storage collaborator for address queries.
///
/// Implementations own filtering and ordering; a missing row is reported as
/// [`ServiceError::NotFound`].
#[async_trait]
pub trait AddressRepository: Send + Sync {
    async fn get_all_addresses(&self, opts: GetAllAddressesOptions) -> Result<Vec<address::Model>, ServiceError>;
    async fn get_address_by_id(&self, opts: GetAddressByIdOptions) -> Result<address::Model, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmAddressRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl AddressRepository for SeaOrmAddressRepository {
    async fn get_all_addresses(&self, opts: GetAllAddressesOptions) -> Result<Vec<address::Model>, ServiceError> {
        let mut query = address::Entity::find().filter(address::Column::Language.eq(opts.language));
        // any shared tag matches (`tags && $1`)
        if !opts.tags.is_empty() {
            query = query.filter(
                Expr::col((address::Entity, address::Column::Tags)).binary(PgBinOper::Overlap, Expr::val(opts.tags)),
            );
        }
        let rows = query
            .order_by_asc(address::Column::Id)
            .limit(opts.limit)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn get_address_by_id(&self, opts: GetAddressByIdOptions) -> Result<address::Model, ServiceError> {
        address::Entity::find_by_id(opts.address_id)
            .filter(address::Column::Language.eq(opts.language))
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("address"))
    }
}

/// Hand-written in-memory repository for tests and doc examples.
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockAddressRepository {
        addresses: Mutex<Vec<address::Model>>,
        failure: Mutex<Option<String>>,
        list_calls: Mutex<Vec<GetAllAddressesOptions>>,
        get_calls: Mutex<Vec<GetAddressByIdOptions>>,
    }

    impl MockAddressRepository {
        pub fn with_addresses(addresses: Vec<address::Model>) -> Self {
            Self { addresses: Mutex::new(addresses), ..Default::default() }
        }

        /// Make every subsequent call fail with a database error.
        pub fn fail_with(&self, message: &str) {
            *self.failure.lock().unwrap() = Some(message.to_string());
        }

        pub fn list_calls(&self) -> Vec<GetAllAddressesOptions> {
            self.list_calls.lock().unwrap().clone()
        }

        pub fn get_calls(&self) -> Vec<GetAddressByIdOptions> {
            self.get_calls.lock().unwrap().clone()
        }

        pub fn call_count(&self) -> usize {
            self.list_calls.lock().unwrap().len() + self.get_calls.lock().unwrap().len()
        }

        fn check_failure(&self) -> Result<(), ServiceError> {
            match self.failure.lock().unwrap().as_ref() {
                Some(msg) => Err(ServiceError::Db(msg.clone())),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl AddressRepository for MockAddressRepository {
        async fn get_all_addresses(&self, opts: GetAllAddressesOptions) -> Result<Vec<address::Model>, ServiceError> {
            self.list_calls.lock().unwrap().push(opts.clone());
            self.check_failure()?;
            let addresses = self.addresses.lock().unwrap();
            Ok(addresses
                .iter()
                .filter(|a| a.language == opts.language)
                .filter(|a| opts.tags.is_empty() || a.tags.iter().any(|t| opts.tags.contains(t)))
                .take(opts.limit as usize)
                .cloned()
                .collect())
        }

        async fn get_address_by_id(&self, opts: GetAddressByIdOptions) -> Result<address::Model, ServiceError> {
            self.get_calls.lock().unwrap().push(opts.clone());
            self.check_failure()?;
            let addresses = self.addresses.lock().unwrap();
            addresses
                .iter()
                .find(|a| a.id == opts.address_id && a.language == opts.language)
                .cloned()
                .ok_or_else(|| ServiceError::not_found("address"))
        }
    }

    /// Build an address with placeholder payload fields.
    pub fn sample_address(id: &str, language: Language, tags: &[&str]) -> address::Model {
        address::Model {
            id: id.to_string(),
            language,
            name: format!("Resident {id}"),
            street: "1 Main Street".to_string(),
            city: "Springfield".to_string(),
            region: None,
            postal_code: "00001".to_string(),
            country: "US".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            created_at: chrono::Utc::now().into(),
        }
    }
}
