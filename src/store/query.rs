//! Predicate queries over contracts.

use crate::contract::Contract;
use chrono::NaiveDate;
use std::cmp::Ordering;

/// A single condition on a contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Status equals the value, ignoring ASCII case
    StatusEq(String),
    /// Type equals the value, ignoring ASCII case
    TypeEq(String),
    /// Contract date within `from..=to`; undated contracts never match
    DateBetween { from: NaiveDate, to: NaiveDate },
    NumberEq(u32),
    /// Identity differs; unpersisted contracts always match
    IdNe(String),
    /// Case-insensitive substring of the title, filing or any party field
    TextContains(String),
}

impl Predicate {
    #[must_use]
    pub fn matches(&self, contract: &Contract) -> bool {
        let fm = &contract.frontmatter;
        match self {
            Predicate::StatusEq(status) => fm
                .status
                .as_deref()
                .is_some_and(|s| s.eq_ignore_ascii_case(status)),
            Predicate::TypeEq(contract_type) => {
                fm.contract_type
                    .as_deref()
                    .is_some_and(|t| t.eq_ignore_ascii_case(contract_type))
            }
            Predicate::DateBetween { from, to } => {
                fm.date.is_some_and(|d| (*from..=*to).contains(&d))
            }
            Predicate::NumberEq(number) => fm.number == Some(*number),
            Predicate::IdNe(id) => contract.id.as_deref() != Some(id.as_str()),
            Predicate::TextContains(needle) => text_matches(contract, needle),
        }
    }
}

fn text_matches(contract: &Contract, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    let fm = &contract.frontmatter;
    let fields = [
        Some(contract.title.as_str()),
        fm.filing.as_deref(),
        fm.party_a.co_contractor.as_deref(),
        fm.party_a.contract_person.as_deref(),
        fm.party_a.signer.as_deref(),
        fm.party_b.co_contractor.as_deref(),
        fm.party_b.contract_person.as_deref(),
        fm.party_b.signer.as_deref(),
    ];
    fields
        .into_iter()
        .flatten()
        .any(|value| value.to_lowercase().contains(&needle))
}

/// A conjunction of predicates. The empty query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    predicates: Vec<Predicate>,
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a predicate to the conjunction.
    #[must_use]
    pub fn with(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    #[must_use]
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    #[must_use]
    pub fn matches(&self, contract: &Contract) -> bool {
        self.predicates.iter().all(|p| p.matches(contract))
    }
}

/// Native store order: ascending number, unnumbered contracts last, ties by identity.
#[must_use]
pub fn native_order(a: &Contract, b: &Contract) -> Ordering {
    match (a.number(), b.number()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
