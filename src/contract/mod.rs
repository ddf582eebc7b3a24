//! The numbered contract record and its validation vocabulary.

pub mod classification;
pub mod error;
pub mod id;
pub mod types;

pub use classification::{validate_classification, ClassificationError};
pub use error::{ContractError, ValidationError, ValidationReason};
pub use types::{Contract, ContractFrontmatter, ContractParty, NUMBER_FIELD};
