//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between DTOs, domain entities and repository ports.

pub mod bootstrap;
pub mod category_service;
pub mod customer_service;
pub mod vendor_service;

pub use bootstrap::seed_data;
pub use category_service::CategoryService;
pub use customer_service::CustomerService;
pub use vendor_service::VendorService;
