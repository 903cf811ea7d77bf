//! Bootstrap data
//!
//! Fills empty tables with a small starter catalog so a fresh deployment has
//! something to browse. Tables that already hold rows are left alone.

use crate::domain::entities::{Category, Customer, Vendor};
use crate::domain::ports::{CategoryRepository, CustomerRepository, VendorRepository};
use crate::error::DomainError;

const CATEGORIES: &[&str] = &["Fruits", "Dried", "Fresh", "Exotic", "Nuts"];

const CUSTOMERS: &[(&str, &str)] = &[("Michael", "Weston"), ("Sam", "Axe")];

const VENDORS: &[&str] = &[
    "Western Tasty Fruits Ltd.",
    "Exotic Fruits Company",
    "Home Fruits",
    "Fun Fresh Fruits Ltd.",
    "Nuts for Nuts Company",
];

/// Seed each empty table with the starter data
pub async fn seed_data<C, V, K>(
    customers: &C,
    vendors: &V,
    categories: &K,
) -> Result<(), DomainError>
where
    C: CustomerRepository + ?Sized,
    V: VendorRepository + ?Sized,
    K: CategoryRepository + ?Sized,
{
    if categories.find_all().await?.is_empty() {
        for name in CATEGORIES {
            categories.save(Category::new(*name)).await?;
        }
        tracing::info!(count = CATEGORIES.len(), "Loaded categories");
    }

    if customers.find_all().await?.is_empty() {
        for (firstname, lastname) in CUSTOMERS {
            customers.save(Customer::new(*firstname, *lastname)).await?;
        }
        tracing::info!(count = CUSTOMERS.len(), "Loaded customers");
    }

    if vendors.find_all().await?.is_empty() {
        for name in VENDORS {
            vendors.save(Vendor::new(*name)).await?;
        }
        tracing::info!(count = VENDORS.len(), "Loaded vendors");
    }

    Ok(())
}
