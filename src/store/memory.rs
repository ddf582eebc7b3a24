//! In-memory contract store, for tests and embedding.

use super::query::native_order;
use super::{ContractStore, ContractStoreMut, DateSpan, Query, StoreError, WriteGuard};
use crate::contract::id::generate_contract_id;
use crate::contract::Contract;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

#[derive(Debug, Default)]
pub struct InMemoryStore {
    contracts: RwLock<HashMap<String, Contract>>,
    write_lock: Arc<Mutex<()>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored contracts.
    pub async fn len(&self) -> usize {
        self.contracts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.contracts.read().await.is_empty()
    }
}

#[async_trait]
impl ContractStore for InMemoryStore {
    async fn get(&self, id: &str) -> Result<Option<Contract>, StoreError> {
        Ok(self.contracts.read().await.get(id).cloned())
    }

    async fn query(&self, query: &Query) -> Result<Vec<Contract>, StoreError> {
        let mut matches: Vec<Contract> = self
            .contracts
            .read()
            .await
            .values()
            .filter(|c| query.matches(c))
            .cloned()
            .collect();
        matches.sort_by(native_order);
        Ok(matches)
    }

    async fn max_number(&self) -> Result<Option<u32>, StoreError> {
        Ok(self
            .contracts
            .read()
            .await
            .values()
            .filter_map(Contract::number)
            .max())
    }

    async fn date_span(&self) -> Result<Option<DateSpan>, StoreError> {
        Ok(DateSpan::of(
            self.contracts
                .read()
                .await
                .values()
                .filter_map(Contract::date),
        ))
    }
}

#[async_trait]
impl ContractStoreMut for InMemoryStore {
    async fn lock_writes(&self) -> Result<WriteGuard, StoreError> {
        Ok(WriteGuard::memory(Arc::clone(&self.write_lock).lock_owned().await))
    }

    async fn insert(&self, mut contract: Contract) -> Result<Contract, StoreError> {
        if let Some(id) = &contract.id {
            return Err(StoreError::AlreadyPersisted(id.clone()));
        }
        let id = generate_contract_id();
        contract.id = Some(id.clone());
        self.contracts.write().await.insert(id, contract.clone());
        Ok(contract)
    }

    async fn update(&self, contract: &Contract) -> Result<(), StoreError> {
        let id = contract.id.as_ref().ok_or(StoreError::MissingId)?;
        let mut contracts = self.contracts.write().await;
        let stored = contracts
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        *stored = contract.clone();
        Ok(())
    }
}
