//! Filtered listing, year discovery and autocompletion over contracts.
mod autocomplete;
mod filter;
mod planner;

pub use autocomplete::{AutocompleteProperty, AUTOCOMPLETE_PROPERTIES};
pub use filter::{ContractFilter, ALL_YEARS};
pub use planner::{years_between, QueryPlanner};
