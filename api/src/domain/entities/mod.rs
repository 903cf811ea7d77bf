//! Domain entities
//!
//! Pure domain models for the resources the API manages.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod category;
pub mod customer;
pub mod vendor;

pub use category::{Category, CategoryId};
pub use customer::{Customer, CustomerId};
pub use vendor::{Vendor, VendorId};
