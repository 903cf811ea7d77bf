//! Test utilities
//!
//! Manual in-memory repositories and test fixtures for unit testing.
//!
//! The in-memory repositories honour the same contract as the PostgreSQL
//! adapters (sequential ids, upsert on save, silent delete), so services and
//! the full router can be exercised without a database. `mockall` mocks are
//! only used for failures these repositories cannot produce.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
