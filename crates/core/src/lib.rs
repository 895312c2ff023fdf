//! Dealership Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic of the dealership back office:
//! the profit split between the company and a car's shareholder, the
//! inventory, shareholders, employees, expenses, and the reports built on
//! top of them. It is database-agnostic and defines traits that are
//! implemented by the `storage-sqlite` crate.

pub mod cars;
pub mod constants;
pub mod employees;
pub mod errors;
pub mod expenses;
pub mod profit_split;
pub mod reports;
pub mod shareholders;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

pub use profit_split::{ProfitSplit, ProfitSplitForm};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
