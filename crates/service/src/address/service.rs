use std::sync::Arc;

use tracing::{debug, instrument};

use models::{address, Language};

use crate::address::repository::{AddressRepository, GetAddressByIdOptions, GetAllAddressesOptions};
use crate::errors::ServiceError;
use crate::pagination::Limit;

#[derive(Clone, Debug)]
pub struct GetAddressesInput {
    pub language: Language,
    pub tags: Vec<String>,
    /// Requested item count; out-of-range values fall back to the cap.
    pub limit: i64,
}

#[derive(Clone, Debug)]
pub struct GetAddressesOutput {
    pub addresses: Vec<address::Model>,
    /// Number of items returned, not the number of matches in storage.
    pub count: usize,
}

#[derive(Clone, Debug)]
pub struct GetAddressByIdInput {
    pub language: Language,
    pub id: String,
}

#[derive(Clone, Debug)]
pub struct GetAddressByIdOutput {
    pub address: address::Model,
}

/// Address query service. Callers validate the language and the id before
/// calling in; the service normalizes the limit and delegates to storage.
pub struct AddressService {
    repo: Arc<dyn AddressRepository>,
}

impl AddressService {
    pub fn new(repo: Arc<dyn AddressRepository>) -> Self { Self { repo } }

    /// List addresses for a language, optionally filtered by tags.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use models::Language;
    /// use service::address::repository::mock::{sample_address, MockAddressRepository};
    /// use service::address::service::{AddressService, GetAddressesInput};
    ///
    /// let repo = Arc::new(MockAddressRepository::with_addresses(vec![
    ///     sample_address("a1", Language::Zh, &["home"]),
    ///     sample_address("a2", Language::En, &[]),
    /// ]));
    /// let svc = AddressService::new(repo.clone());
    /// let input = GetAddressesInput { language: Language::Zh, tags: vec![], limit: 0 };
    /// let out = tokio_test::block_on(svc.get_addresses(input)).unwrap();
    /// assert_eq!(out.count, 1);
    /// assert_eq!(repo.list_calls()[0].limit, 100);
    /// ```
    #[instrument(skip(self, input), fields(language = %input.language, tags = input.tags.len()))]
    pub async fn get_addresses(&self, input: GetAddressesInput) -> Result<GetAddressesOutput, ServiceError> {
        let limit = Limit(input.limit).normalize();
        let opts = GetAllAddressesOptions {
            language: input.language,
            tags: input.tags,
            limit,
        };
        let addresses = self
            .repo
            .get_all_addresses(opts)
            .await
            .map_err(|e| ServiceError::retrieval("failed to get addresses", e))?;
        let count = addresses.len();
        debug!(limit, count, "addresses fetched");
        Ok(GetAddressesOutput { addresses, count })
    }

    #[instrument(skip(self, input), fields(language = %input.language, address_id = %input.id))]
    pub async fn get_address_by_id(&self, input: GetAddressByIdInput) -> Result<GetAddressByIdOutput, ServiceError> {
        let opts = GetAddressByIdOptions {
            language: input.language,
            address_id: input.id,
        };
        let address = self
            .repo
            .get_address_by_id(opts)
            .await
            .map_err(|e| ServiceError::retrieval("failed to get address", e))?;
        Ok(GetAddressByIdOutput { address })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::repository::mock::{sample_address, MockAddressRepository};

    fn setup(addresses: Vec<address::Model>) -> (AddressService, Arc<MockAddressRepository>) {
        let repo = Arc::new(MockAddressRepository::with_addresses(addresses));
        (AddressService::new(repo.clone()), repo)
    }

    fn input(limit: i64) -> GetAddressesInput {
        GetAddressesInput { language: Language::Zh, tags: vec![], limit }
    }

    #[tokio::test]
    async fn limit_is_normalized_before_reaching_storage() {
        let cases = [(0, 100), (-5, 100), (500, 100), (101, 100), (30, 30), (100, 100), (1, 1)];
        for (requested, effective) in cases {
            let (svc, repo) = setup(vec![]);
            svc.get_addresses(input(requested)).await.unwrap();
            let calls = repo.list_calls();
            assert_eq!(calls.len(), 1);
            assert_eq!(calls[0].limit, effective, "requested {requested}");
        }
    }

    #[tokio::test]
    async fn filter_options_carry_language_and_tags() {
        let (svc, repo) = setup(vec![]);
        let input = GetAddressesInput {
            language: Language::Ja,
            tags: vec!["home".into(), "work".into()],
            limit: 10,
        };
        svc.get_addresses(input).await.unwrap();
        assert_eq!(
            repo.list_calls(),
            vec![GetAllAddressesOptions {
                language: Language::Ja,
                tags: vec!["home".into(), "work".into()],
                limit: 10,
            }]
        );
    }

    #[tokio::test]
    async fn count_equals_returned_items() {
        let (svc, _repo) = setup(vec![
            sample_address("a1", Language::Zh, &[]),
            sample_address("a2", Language::Zh, &[]),
            sample_address("a3", Language::Zh, &[]),
            sample_address("e1", Language::En, &[]),
        ]);
        let out = svc.get_addresses(input(2)).await.unwrap();
        assert_eq!(out.count, 2);
        assert_eq!(out.addresses.len(), out.count);
        assert!(out.addresses.iter().all(|a| a.language == Language::Zh));
    }

    #[tokio::test]
    async fn storage_failure_is_wrapped_as_address_retrieval_failure() {
        let (svc, repo) = setup(vec![sample_address("a1", Language::Zh, &[])]);
        repo.fail_with("connection refused");
        let err = svc.get_addresses(input(10)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Retrieval { .. }));
        let msg = err.to_string();
        assert!(msg.contains("failed to get addresses"), "{msg}");
        assert!(msg.contains("connection refused"), "{msg}");
    }

    #[tokio::test]
    async fn lookup_returns_matching_item() {
        let (svc, repo) = setup(vec![sample_address("a1", Language::Zh, &["vip"])]);
        let out = svc
            .get_address_by_id(GetAddressByIdInput { language: Language::Zh, id: "a1".into() })
            .await
            .unwrap();
        assert_eq!(out.address.id, "a1");
        assert_eq!(
            repo.get_calls(),
            vec![GetAddressByIdOptions { language: Language::Zh, address_id: "a1".into() }]
        );
    }

    #[tokio::test]
    async fn repeated_lookup_is_idempotent() {
        let (svc, _repo) = setup(vec![sample_address("a1", Language::En, &[])]);
        let lookup = || GetAddressByIdInput { language: Language::En, id: "a1".into() };
        let first = svc.get_address_by_id(lookup()).await.unwrap().address;
        for _ in 0..3 {
            let again = svc.get_address_by_id(lookup()).await.unwrap().address;
            assert_eq!(again, first);
        }
    }

    #[tokio::test]
    async fn missing_item_is_wrapped_but_still_recognizable() {
        let (svc, _repo) = setup(vec![sample_address("a1", Language::En, &[])]);
        // same id, different language
        let err = svc
            .get_address_by_id(GetAddressByIdInput { language: Language::Zh, id: "a1".into() })
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("failed to get address:"));
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn lookup_storage_failure_is_not_a_not_found() {
        let (svc, repo) = setup(vec![sample_address("a1", Language::En, &[])]);
        repo.fail_with("timeout");
        let err = svc
            .get_address_by_id(GetAddressByIdInput { language: Language::En, id: "a1".into() })
            .await
            .unwrap_err();
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("timeout"));
    }
}
