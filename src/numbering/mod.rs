//! Consecutive contract numbering.
mod allocator;
mod audit;

pub use allocator::{NumberAllocator, START_NUMBER};
pub use audit::{DuplicateNumber, NumberGap, NumberingReport};
