//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod categories;
pub mod customers;
pub mod vendors;

pub use categories::{
    create_category, delete_category, get_category, get_category_by_name, list_categories,
    patch_category, update_category,
};
pub use customers::{
    create_customer, delete_customer, get_customer, list_customers, patch_customer,
    update_customer,
};
pub use vendors::{
    create_vendor, delete_vendor, get_vendor, list_vendors, patch_vendor, update_vendor,
};
