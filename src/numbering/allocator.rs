//! Allocation and commit-time validation of contract numbers.
//!
//! `next_number` is advisory: it tells a caller which number a new contract
//! should take. `validate_on_save` re-derives the authoritative value from the
//! store at commit time, so a number computed earlier (e.g. while a form was
//! being filled in) can never slip through stale.

use super::audit::NumberingReport;
use crate::contract::{Contract, ContractError, ValidationError, ValidationReason};
use crate::store::{ContractStore, Predicate, Query};
use std::sync::Arc;
use tracing::{debug, info};

/// Number given to the very first contract.
pub const START_NUMBER: u32 = 1000;

pub struct NumberAllocator<S: ?Sized> {
    store: Arc<S>,
    start_number: u32,
}

impl<S: ContractStore + ?Sized> NumberAllocator<S> {
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self::with_start_number(store, START_NUMBER)
    }

    #[must_use]
    pub fn with_start_number(store: Arc<S>, start_number: u32) -> Self {
        Self {
            store,
            start_number,
        }
    }

    #[must_use]
    pub fn start_number(&self) -> u32 {
        self.start_number
    }

    /// The number `candidate` should carry.
    ///
    /// A persisted contract keeps its stored number: the candidate's number is
    /// overwritten with it and it is returned unchanged. Anything else gets the
    /// next free number. Nothing is written to the store.
    pub async fn next_number(&self, candidate: &mut Contract) -> Result<u32, ContractError> {
        if let Some(id) = candidate.id.as_deref() {
            let stored = self
                .store
                .get(id)
                .await?
                .ok_or_else(|| ContractError::not_found(id))?;
            if let Some(number) = stored.number() {
                candidate.frontmatter.number = Some(number);
                return Ok(number);
            }
        }
        self.next_free_number().await
    }

    /// Highest stored number plus one, or the start number for an empty register.
    async fn next_free_number(&self) -> Result<u32, ContractError> {
        match self.store.max_number().await? {
            None => {
                info!(start = self.start_number, "First contract, numbering starts");
                Ok(self.start_number)
            }
            Some(max) => max
                .checked_add(1)
                .ok_or(ContractError::NumberOverflow(max)),
        }
    }

    /// Guard run right before a contract is written.
    ///
    /// - the number must be set;
    /// - a new contract must take exactly the next free number;
    /// - a persisted contract must not share its number with any other contract,
    ///   unreadable documents included.
    pub async fn validate_on_save(&self, record: &Contract) -> Result<(), ContractError> {
        let Some(number) = record.number() else {
            return Err(reject(record, ValidationReason::Required));
        };

        match record.id.as_deref() {
            None => {
                let expected = self.next_free_number().await?;
                if number != expected {
                    return Err(reject(
                        record,
                        ValidationReason::NotConsecutive {
                            expected,
                            actual: number,
                        },
                    ));
                }
            }
            Some(id) => {
                let query = Query::new()
                    .with(Predicate::NumberEq(number))
                    .with(Predicate::IdNe(id.to_string()));
                if !self.store.query(&query).await?.is_empty() {
                    return Err(reject(record, ValidationReason::AlreadyExists));
                }
                for doc in self.store.unreadable().await? {
                    if doc.id != id && doc.salvaged_number()? == Some(number) {
                        return Err(reject(record, ValidationReason::AlreadyExists));
                    }
                }
            }
        }
        Ok(())
    }

    /// Audit the stored numbers for duplicates and gaps. Read-only.
    pub async fn check_sequence(&self) -> Result<NumberingReport, ContractError> {
        let contracts = self.store.query(&Query::new()).await?;
        let unreadable = self.store.unreadable().await?;
        Ok(NumberingReport::build(
            self.start_number,
            &contracts,
            &unreadable,
        ))
    }
}

fn reject(record: &Contract, reason: ValidationReason) -> ContractError {
    debug!(
        id = record.id.as_deref().unwrap_or("<new>"),
        number = ?record.number(),
        reason = reason.key(),
        "Contract number rejected"
    );
    ValidationError::number(reason).into()
}

#[cfg(test)]
#[path = "allocator_tests.rs"]
mod tests;
