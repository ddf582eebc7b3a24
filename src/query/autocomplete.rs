use crate::contract::{Contract, ContractError};
use std::str::FromStr;

/// Property names accepted for autocompletion.
pub const AUTOCOMPLETE_PROPERTIES: [&str; 7] = [
    "title",
    "coContractorA",
    "coContractorB",
    "contractPersonA",
    "contractPersonB",
    "signerA",
    "signerB",
];

/// A text property whose existing values are offered as completions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutocompleteProperty {
    Title,
    CoContractorA,
    CoContractorB,
    ContractPersonA,
    ContractPersonB,
    SignerA,
    SignerB,
}

impl AutocompleteProperty {
    /// The property's value on `contract`, if set.
    #[must_use]
    pub fn value_of(self, contract: &Contract) -> Option<&str> {
        let fm = &contract.frontmatter;
        match self {
            Self::Title => Some(contract.title.as_str()),
            Self::CoContractorA => fm.party_a.co_contractor.as_deref(),
            Self::CoContractorB => fm.party_b.co_contractor.as_deref(),
            Self::ContractPersonA => fm.party_a.contract_person.as_deref(),
            Self::ContractPersonB => fm.party_b.contract_person.as_deref(),
            Self::SignerA => fm.party_a.signer.as_deref(),
            Self::SignerB => fm.party_b.signer.as_deref(),
        }
    }
}

impl FromStr for AutocompleteProperty {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "coContractorA" => Ok(Self::CoContractorA),
            "coContractorB" => Ok(Self::CoContractorB),
            "contractPersonA" => Ok(Self::ContractPersonA),
            "contractPersonB" => Ok(Self::ContractPersonB),
            "signerA" => Ok(Self::SignerA),
            "signerB" => Ok(Self::SignerB),
            other => Err(ContractError::AutocompleteDisabled(other.to_string())),
        }
    }
}
