//! Integrity report over stored contract numbers.
//!
//! Numbers are never reassigned here: duplicates and gaps can only come from
//! edits made outside the registry, so they are reported for a human to fix.

use crate::contract::Contract;
use crate::store::{RecoveredNumber, UnreadableContract};
use serde::Serialize;
use std::collections::BTreeMap;

/// A number held by more than one contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateNumber {
    pub number: u32,
    pub ids: Vec<String>,
}

/// A run of missing numbers, `from..=to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumberGap {
    pub from: u32,
    pub to: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberingReport {
    pub start_number: u32,
    pub max_number: Option<u32>,
    /// Contracts carrying a number
    pub numbered: usize,
    pub duplicates: Vec<DuplicateNumber>,
    pub gaps: Vec<NumberGap>,
    /// Numbers below the start number
    pub below_start: Vec<u32>,
    /// Identities of contracts without a number
    pub unnumbered: Vec<String>,
    /// Identities of stored documents that cannot be read; any number
    /// salvaged from them is counted above
    pub unreadable: Vec<String>,
}

impl NumberingReport {
    pub(super) fn build(
        start_number: u32,
        contracts: &[Contract],
        unreadable_docs: &[UnreadableContract],
    ) -> Self {
        let mut by_number: BTreeMap<u32, Vec<String>> = BTreeMap::new();
        let mut unnumbered = Vec::new();
        let mut unreadable = Vec::new();

        for contract in contracts {
            let id = contract.id.clone().unwrap_or_default();
            match contract.number() {
                Some(number) => by_number.entry(number).or_default().push(id),
                None => unnumbered.push(id),
            }
        }
        for doc in unreadable_docs {
            if let RecoveredNumber::Number(number) = doc.number {
                by_number.entry(number).or_default().push(doc.id.clone());
            }
            unreadable.push(doc.id.clone());
        }

        let numbered = by_number.values().map(Vec::len).sum();
        let max_number = by_number.keys().next_back().copied();
        let below_start = by_number
            .range(..start_number)
            .map(|(number, _)| *number)
            .collect();
        let gaps = find_gaps(start_number, by_number.range(start_number..).map(|(n, _)| *n));
        let duplicates = by_number
            .into_iter()
            .filter(|(_, ids)| ids.len() > 1)
            .map(|(number, ids)| DuplicateNumber { number, ids })
            .collect();

        Self {
            start_number,
            max_number,
            numbered,
            duplicates,
            gaps,
            below_start,
            unnumbered,
            unreadable,
        }
    }

    /// True when the numbers form one unbroken, duplicate-free run from the start number.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.duplicates.is_empty()
            && self.gaps.is_empty()
            && self.below_start.is_empty()
            && self.unnumbered.is_empty()
            && self.unreadable.is_empty()
    }
}

/// Missing runs between `start` and the largest of the ascending, distinct `numbers`.
fn find_gaps(start: u32, numbers: impl Iterator<Item = u32>) -> Vec<NumberGap> {
    let mut gaps = Vec::new();
    let mut expected = start;
    for number in numbers {
        if number > expected {
            gaps.push(NumberGap {
                from: expected,
                to: number.saturating_sub(1),
            });
        }
        match number.checked_add(1) {
            Some(next) => expected = next,
            None => break,
        }
    }
    gaps
}
