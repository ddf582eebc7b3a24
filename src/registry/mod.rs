//! Contract register: the write boundary around a store.
//!
//! Every create and update runs its numbering check and the store write while
//! holding the store's write lock, so the maximum number read by the check
//! cannot change before the write lands. Writers sharing one registry queue on
//! a mutex first and take the store lock one at a time.

mod types;

pub use types::{CreateContractOptions, UpdateContractOptions};

use crate::config::{ClassificationConfig, RegistryConfig};
use crate::contract::id::short_id;
use crate::contract::{validate_classification, Contract, ContractError, ContractFrontmatter};
use crate::numbering::{NumberAllocator, NumberingReport};
use crate::query::{ContractFilter, QueryPlanner};
use crate::store::{ContractStoreMut, Predicate, Query};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

pub struct ContractRegistry<S: ?Sized> {
    store: Arc<S>,
    allocator: NumberAllocator<S>,
    planner: QueryPlanner<S>,
    classification: ClassificationConfig,
    write_lock: Mutex<()>,
}

impl<S: ContractStoreMut + ?Sized> ContractRegistry<S> {
    #[must_use]
    pub fn new(store: Arc<S>, config: &RegistryConfig) -> Self {
        Self {
            allocator: NumberAllocator::with_start_number(
                Arc::clone(&store),
                config.numbering.start_number,
            ),
            planner: QueryPlanner::new(Arc::clone(&store)),
            store,
            classification: config.classification.clone(),
            write_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Create a contract, numbering it unless an explicit number is given.
    pub async fn create(&self, options: CreateContractOptions) -> Result<Contract, ContractError> {
        let _guard = self.write_lock.lock().await;
        let _store_lock = self.store.lock_writes().await?;

        let mut contract = Contract::new(options.title);
        contract.body = options.body;
        let fm = &mut contract.frontmatter;
        fm.date = options.date;
        fm.status = options.status;
        fm.contract_type = options.contract_type;
        fm.valid_from = options.valid_from;
        fm.valid_until = options.valid_until;
        fm.filing = options.filing;
        fm.party_a = options.party_a;
        fm.party_b = options.party_b;
        self.canonicalize(&mut contract.frontmatter)?;

        let number = match options.number {
            Some(number) => number,
            None => self.allocator.next_number(&mut contract).await?,
        };
        contract.frontmatter.number = Some(number);

        self.allocator.validate_on_save(&contract).await?;
        let stored = self.store.insert(contract).await?;

        info!(
            number,
            id = short_id(stored.id.as_deref().unwrap_or_default()),
            "Created contract"
        );
        Ok(stored)
    }

    /// Apply `options` to a stored contract and save it.
    pub async fn update(
        &self,
        id: &str,
        options: UpdateContractOptions,
    ) -> Result<Contract, ContractError> {
        let _guard = self.write_lock.lock().await;
        let _store_lock = self.store.lock_writes().await?;

        let mut contract = self.get(id).await?;
        if let Some(title) = options.title {
            contract.title = title;
        }
        if let Some(body) = options.body {
            contract.body = body;
        }
        let fm = &mut contract.frontmatter;
        fm.number = options.number.or(fm.number);
        fm.date = options.date.or(fm.date);
        fm.status = options.status.or(fm.status.take());
        fm.contract_type = options.contract_type.or(fm.contract_type.take());
        fm.valid_from = options.valid_from.or(fm.valid_from);
        fm.valid_until = options.valid_until.or(fm.valid_until);
        fm.filing = options.filing.or(fm.filing.take());
        if let Some(party) = options.party_a {
            fm.party_a = party;
        }
        if let Some(party) = options.party_b {
            fm.party_b = party;
        }
        fm.updated_at = crate::utils::now_iso();
        self.canonicalize(&mut contract.frontmatter)?;

        self.allocator.validate_on_save(&contract).await?;
        self.store.update(&contract).await?;

        info!(number = ?contract.number(), id = short_id(id), "Updated contract");
        Ok(contract)
    }

    /// Fetch a contract by identity.
    pub async fn get(&self, id: &str) -> Result<Contract, ContractError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| ContractError::not_found(id))
    }

    /// Fetch a contract by business number.
    pub async fn get_by_number(&self, number: u32) -> Result<Contract, ContractError> {
        self.store
            .query(&Query::new().with(Predicate::NumberEq(number)))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ContractError::not_found(format!("number {number}")))
    }

    /// See [`NumberAllocator::next_number`].
    pub async fn next_number(&self, candidate: &mut Contract) -> Result<u32, ContractError> {
        self.allocator.next_number(candidate).await
    }

    pub async fn list(&self, filter: &ContractFilter) -> Result<Vec<Contract>, ContractError> {
        self.planner.list(filter).await
    }

    pub async fn years(&self) -> Result<Vec<i32>, ContractError> {
        self.planner.years().await
    }

    pub async fn autocomplete(
        &self,
        property: &str,
        prefix: &str,
        limit: usize,
    ) -> Result<Vec<String>, ContractError> {
        self.planner.autocomplete(property, prefix, limit).await
    }

    pub async fn check_sequence(&self) -> Result<NumberingReport, ContractError> {
        self.allocator.check_sequence().await
    }

    /// Validate status and type, rewriting them to their configured spelling.
    fn canonicalize(&self, fm: &mut ContractFrontmatter) -> Result<(), ContractError> {
        if let Some(status) = fm.status.as_deref() {
            let canonical = validate_classification(status, &self.classification.statuses)
                .map_err(|e| ContractError::InvalidStatus {
                    status: e.value,
                    allowed: e.allowed,
                })?;
            fm.status = Some(canonical);
        }
        if let Some(contract_type) = fm.contract_type.as_deref() {
            let canonical = validate_classification(contract_type, &self.classification.types)
                .map_err(|e| ContractError::InvalidType {
                    contract_type: e.value,
                    allowed: e.allowed,
                })?;
            fm.contract_type = Some(canonical);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
