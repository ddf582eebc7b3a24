use crate::store::{Predicate, Query};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Year value meaning "no year restriction".
pub const ALL_YEARS: i32 = -1;

/// Optional criteria narrowing a contract listing. All set criteria must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractFilter {
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub contract_type: Option<String>,
    /// Calendar year of the contract date; `None` for all years
    pub year: Option<i32>,
    /// Free text searched in the title, filing and party fields
    pub search: Option<String>,
}

impl ContractFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    #[must_use]
    pub fn with_type(mut self, contract_type: impl Into<String>) -> Self {
        self.contract_type = Some(contract_type.into());
        self
    }

    /// Restrict to one year. [`ALL_YEARS`] or any other non-positive value lifts the restriction.
    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = (year > 0).then_some(year);
        self
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Translate the filter into a store query.
    #[must_use]
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        if let Some(status) = &self.status {
            query = query.with(Predicate::StatusEq(status.clone()));
        }
        if let Some(contract_type) = &self.contract_type {
            query = query.with(Predicate::TypeEq(contract_type.clone()));
        }
        if let Some(year) = self.year.filter(|y| *y > 0) {
            query = query.with(year_predicate(year));
        }
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            query = query.with(Predicate::TextContains(search.to_string()));
        }
        query
    }
}

/// January 1st through December 31st of `year`.
fn year_predicate(year: i32) -> Predicate {
    match (
        NaiveDate::from_ymd_opt(year, 1, 1),
        NaiveDate::from_ymd_opt(year, 12, 31),
    ) {
        (Some(from), Some(to)) => Predicate::DateBetween { from, to },
        // Outside the representable calendar no contract can match
        _ => Predicate::DateBetween {
            from: NaiveDate::MAX,
            to: NaiveDate::MIN,
        },
    }
}
