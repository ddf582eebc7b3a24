//! The store capability the numbering and query services depend on.
//!
//! Services only see [`ContractStore`]: fetch by identity, predicate queries
//! and the two aggregates. Writes go through [`ContractStoreMut`], which only
//! the registry uses.

mod error;
pub mod file;
mod lock;
pub mod memory;
pub mod query;

pub use error::StoreError;
pub use file::FileStore;
pub use lock::{WriteGuard, LOCK_FILE};
pub use memory::InMemoryStore;
pub use query::{Predicate, Query};

use crate::contract::Contract;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Earliest and latest contract date across a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpan {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl DateSpan {
    /// Span of the given dates, `None` when there are none.
    pub fn of(dates: impl IntoIterator<Item = NaiveDate>) -> Option<Self> {
        dates.into_iter().fold(None, |span, date| {
            Some(match span {
                None => DateSpan {
                    min: date,
                    max: date,
                },
                Some(DateSpan { min, max }) => DateSpan {
                    min: min.min(date),
                    max: max.max(date),
                },
            })
        })
    }
}

/// What could be salvaged of an unreadable document's number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveredNumber {
    Number(u32),
    /// The frontmatter parses far enough to show there is no number
    Unnumbered,
    Unknown,
}

/// A stored document that exists but cannot be read as a contract.
///
/// It is left out of listings, but its number still counts as taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreadableContract {
    pub id: String,
    pub number: RecoveredNumber,
    pub reason: String,
}

impl UnreadableContract {
    /// The salvaged number; `NumberUnknown` when nothing could be salvaged.
    pub fn salvaged_number(&self) -> Result<Option<u32>, StoreError> {
        match self.number {
            RecoveredNumber::Number(number) => Ok(Some(number)),
            RecoveredNumber::Unnumbered => Ok(None),
            RecoveredNumber::Unknown => Err(StoreError::NumberUnknown {
                id: self.id.clone(),
                reason: self.reason.clone(),
            }),
        }
    }
}

/// Read access to stored contracts.
#[async_trait]
pub trait ContractStore: Send + Sync {
    /// Fetch a contract by identity.
    async fn get(&self, id: &str) -> Result<Option<Contract>, StoreError>;

    /// All contracts matching every predicate of `query`, in the store's native order.
    async fn query(&self, query: &Query) -> Result<Vec<Contract>, StoreError>;

    /// Highest number held by any contract, `None` when no contract is numbered.
    ///
    /// Numbers salvaged from unreadable documents count. Fails with
    /// `NumberUnknown` when an unreadable document's number cannot be salvaged.
    async fn max_number(&self) -> Result<Option<u32>, StoreError>;

    /// Earliest and latest contract date, `None` when no contract is dated.
    async fn date_span(&self) -> Result<Option<DateSpan>, StoreError>;

    /// Documents present in the store that cannot be read as contracts.
    async fn unreadable(&self) -> Result<Vec<UnreadableContract>, StoreError> {
        Ok(Vec::new())
    }
}

/// Write access; assigning identities is the store's job.
#[async_trait]
pub trait ContractStoreMut: ContractStore {
    /// Shut out every other writer of this store, in this process or another,
    /// until the guard is dropped.
    async fn lock_writes(&self) -> Result<WriteGuard, StoreError>;

    /// Persist a new contract and return it with its assigned identity.
    async fn insert(&self, contract: Contract) -> Result<Contract, StoreError>;

    /// Overwrite an already persisted contract.
    async fn update(&self, contract: &Contract) -> Result<(), StoreError>;
}
