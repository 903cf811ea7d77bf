//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod category_repo;
pub mod customer_repo;
pub mod schema;
pub mod vendor_repo;


pub use category_repo::PostgresCategoryRepository;
pub use customer_repo::PostgresCustomerRepository;
pub use schema::ensure_tables;
pub use vendor_repo::PostgresVendorRepository;
