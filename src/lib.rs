//! Contract register with gap-free business numbering and filtered listings.
//!
//! [`numbering::NumberAllocator`] hands out and checks contract numbers,
//! [`query::QueryPlanner`] answers filtered listings and the year span, and
//! [`registry::ContractRegistry`] wraps both around a store as the single
//! write boundary.

// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing,
        clippy::missing_assert_message,
        clippy::default_numeric_fallback
    )
)]

pub mod common;
pub mod config;
pub mod contract;
pub mod logging;
pub mod numbering;
pub mod query;
pub mod registry;
pub mod store;
pub mod utils;

pub use config::{load_config, RegistryConfig};
pub use contract::{Contract, ContractError, ValidationError, ValidationReason};
pub use numbering::NumberAllocator;
pub use query::{ContractFilter, QueryPlanner};
pub use registry::{ContractRegistry, CreateContractOptions, UpdateContractOptions};
pub use store::{ContractStore, ContractStoreMut, FileStore, InMemoryStore};
