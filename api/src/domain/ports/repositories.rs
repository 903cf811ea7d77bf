//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//!
//! Every repository follows the same contract:
//! - `save` inserts when the entity has no id and assigns one; otherwise it
//!   overwrites the record with that id, inserting it if none exists.
//! - `delete_by_id` succeeds silently when nothing matches.
//! - `find_all` returns records in the store's natural order.

use async_trait::async_trait;

use crate::domain::entities::{Category, CategoryId, Customer, CustomerId, Vendor, VendorId};
use crate::error::DomainError;

/// Repository for Customer entities
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Find a customer by ID
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, DomainError>;

    /// List every customer
    async fn find_all(&self) -> Result<Vec<Customer>, DomainError>;

    /// Insert or overwrite a customer, returning the stored record
    async fn save(&self, customer: Customer) -> Result<Customer, DomainError>;

    /// Delete a customer
    async fn delete_by_id(&self, id: CustomerId) -> Result<(), DomainError>;
}

/// Repository for Vendor entities
#[async_trait]
pub trait VendorRepository: Send + Sync {
    async fn find_by_id(&self, id: VendorId) -> Result<Option<Vendor>, DomainError>;

    async fn find_all(&self) -> Result<Vec<Vendor>, DomainError>;

    async fn save(&self, vendor: Vendor) -> Result<Vendor, DomainError>;

    async fn delete_by_id(&self, id: VendorId) -> Result<(), DomainError>;
}

/// Repository for Category entities
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, DomainError>;

    /// Find a category by its exact name
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError>;

    async fn find_all(&self) -> Result<Vec<Category>, DomainError>;

    async fn save(&self, category: Category) -> Result<Category, DomainError>;

    async fn delete_by_id(&self, id: CategoryId) -> Result<(), DomainError>;
}
