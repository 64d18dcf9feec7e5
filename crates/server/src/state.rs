use std::sync::Arc;

use service::address::{repository::AddressRepository, AddressService};
use service::prompt::{repository::PromptRepository, PromptService};

use crate::routes::auth::AdminAuth;

/// Shared per-process handles. Each request builds its own inputs; nothing
/// here is mutated after startup.
#[derive(Clone)]
pub struct ServerState {
    pub addresses: Arc<AddressService>,
    pub prompts: Arc<PromptService>,
    pub auth: AdminAuth,
}

impl ServerState {
    pub fn new(
        address_repo: Arc<dyn AddressRepository>,
        prompt_repo: Arc<dyn PromptRepository>,
        auth: AdminAuth,
    ) -> Self {
        Self {
            addresses: Arc::new(AddressService::new(address_repo)),
            prompts: Arc::new(PromptService::new(prompt_repo)),
            auth,
        }
    }
}
