//! Contract record types.
//!
//! A contract is stored as `<id>.md`: the frontmatter holds every structured
//! field, the H1 heading holds the title and the rest of the file is free text.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Name of the business number field, as reported in validation errors.
pub const NUMBER_FIELD: &str = "number";

/// One side of a contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContractParty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub co_contractor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_person: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signing_date: Option<NaiveDate>,
}

impl ContractParty {
    /// True when no field of the party is filled in.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.co_contractor.is_none()
            && self.contract_person.is_none()
            && self.signer.is_none()
            && self.signing_date.is_none()
    }
}

/// Structured contract fields, serialized as YAML frontmatter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContractFrontmatter {
    /// Business number; unique and consecutive across all contracts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    /// Contract date; determines the contract's year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<NaiveDate>,
    /// Where the signed paper copy is filed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filing: Option<String>,
    #[serde(default, skip_serializing_if = "ContractParty::is_empty")]
    pub party_a: ContractParty,
    #[serde(default, skip_serializing_if = "ContractParty::is_empty")]
    pub party_b: ContractParty,
    /// ISO timestamp when the contract was created
    #[serde(default)]
    pub created_at: String,
    /// ISO timestamp when the contract was last updated
    #[serde(default)]
    pub updated_at: String,
}

/// A contract, persisted or not.
///
/// `id` is `None` until the store persists the contract for the first time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: Option<String>,
    pub title: String,
    pub body: String,
    #[serde(flatten)]
    pub frontmatter: ContractFrontmatter,
}

impl Contract {
    /// A fresh, unnumbered contract.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        let now = crate::utils::now_iso();
        Self {
            id: None,
            title: title.into(),
            body: String::new(),
            frontmatter: ContractFrontmatter {
                created_at: now.clone(),
                updated_at: now,
                ..ContractFrontmatter::default()
            },
        }
    }

    #[must_use]
    pub fn with_number(mut self, number: u32) -> Self {
        self.frontmatter.number = Some(number);
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.frontmatter.date = Some(date);
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.frontmatter.status = Some(status.into());
        self
    }

    #[must_use]
    pub fn with_type(mut self, contract_type: impl Into<String>) -> Self {
        self.frontmatter.contract_type = Some(contract_type.into());
        self
    }

    #[must_use]
    pub fn number(&self) -> Option<u32> {
        self.frontmatter.number
    }

    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        self.frontmatter.date
    }

    /// Calendar year of the contract date.
    #[must_use]
    pub fn year(&self) -> Option<i32> {
        self.frontmatter.date.map(|d| d.year())
    }

    /// True until the store has assigned an identity.
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
