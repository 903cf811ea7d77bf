//! SeaORM entities
//!
//! Row models for the database tables. These are separate from the domain
//! entities in `domain::entities`; adapters convert between the two.

pub mod categories;
pub mod customers;
pub mod vendors;
