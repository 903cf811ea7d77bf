//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{Category, Customer, Vendor};

/// Create an unsaved test customer
pub fn test_customer() -> Customer {
    Customer::new("Joe", "Newman")
}

/// Create an unsaved test vendor
pub fn test_vendor() -> Vendor {
    Vendor::new("Western Tasty Fruits Ltd.")
}

/// Create an unsaved test category
pub fn test_category() -> Category {
    Category::new("Fruits")
}
