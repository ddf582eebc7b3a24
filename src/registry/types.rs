use crate::contract::ContractParty;
use chrono::NaiveDate;

/// Options for creating a new contract.
#[derive(Debug, Clone, Default)]
pub struct CreateContractOptions {
    pub title: String,
    pub body: String,
    /// Explicit number; when `None` the next free number is taken
    pub number: Option<u32>,
    pub date: Option<NaiveDate>,
    pub status: Option<String>,
    pub contract_type: Option<String>,
    pub valid_from: Option<NaiveDate>,
    pub valid_until: Option<NaiveDate>,
    pub filing: Option<String>,
    pub party_a: ContractParty,
    pub party_b: ContractParty,
}

/// Options for updating a contract. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateContractOptions {
    pub title: Option<String>,
    pub body: Option<String>,
    /// Renumber the contract; checked against every other contract
    pub number: Option<u32>,
    pub date: Option<NaiveDate>,
    pub status: Option<String>,
    pub contract_type: Option<String>,
    pub valid_from: Option<NaiveDate>,
    pub valid_until: Option<NaiveDate>,
    pub filing: Option<String>,
    pub party_a: Option<ContractParty>,
    pub party_b: Option<ContractParty>,
}
