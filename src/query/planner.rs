//! Executes contract filters against the store.

use super::autocomplete::AutocompleteProperty;
use super::filter::ContractFilter;
use crate::contract::{Contract, ContractError};
use crate::store::{ContractStore, Query};
use chrono::Datelike;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;

pub struct QueryPlanner<S: ?Sized> {
    store: Arc<S>,
}

impl<S: ContractStore + ?Sized> QueryPlanner<S> {
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Contracts matching `filter`, in the store's native order.
    pub async fn list(&self, filter: &ContractFilter) -> Result<Vec<Contract>, ContractError> {
        debug!(?filter, "Listing contracts");
        Ok(self.store.query(&filter.to_query()).await?)
    }

    /// Every calendar year from the earliest to the latest contract date, ascending.
    ///
    /// Empty when no contract carries a date.
    pub async fn years(&self) -> Result<Vec<i32>, ContractError> {
        Ok(self
            .store
            .date_span()
            .await?
            .map(|span| years_between(span.min.year(), span.max.year()))
            .unwrap_or_default())
    }

    /// Distinct existing values of `property` starting with `prefix` (ignoring case), sorted.
    pub async fn autocomplete(
        &self,
        property: &str,
        prefix: &str,
        limit: usize,
    ) -> Result<Vec<String>, ContractError> {
        let property: AutocompleteProperty = property.parse()?;
        let prefix = prefix.to_lowercase();
        let values: BTreeSet<String> = self
            .store
            .query(&Query::new())
            .await?
            .iter()
            .filter_map(|c| property.value_of(c))
            .filter(|v| !v.is_empty() && v.to_lowercase().starts_with(&prefix))
            .map(str::to_string)
            .collect();
        Ok(values.into_iter().take(limit).collect())
    }
}

/// Inclusive run of years; empty if `min > max`.
#[must_use]
pub fn years_between(min: i32, max: i32) -> Vec<i32> {
    (min..=max).collect()
}

#[cfg(test)]
#[path = "planner_tests.rs"]
mod tests;
