//! SQLite storage implementation for the dealership back office.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `dealership-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for cars, shareholders, employees and expenses
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! The core crate is database-agnostic and works with traits.
//!
//! ```text
//!          core (domain)
//!                │
//!                ▼
//!     storage-sqlite (this crate)
//!                │
//!                ▼
//!            SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;
pub(crate) mod utils;

// Repository implementations
pub mod cars;
pub mod employees;
pub mod expenses;
pub mod shareholders;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export repositories
pub use cars::CarRepository;
pub use employees::EmployeeRepository;
pub use expenses::ExpenseRepository;
pub use shareholders::ShareholderRepository;

// Re-export from dealership-core for convenience
pub use dealership_core::errors::{DatabaseError, Error, Result};
