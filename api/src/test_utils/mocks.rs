//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Category, CategoryId, Customer, CustomerId, Vendor, VendorId};
use crate::domain::ports::{CategoryRepository, CustomerRepository, VendorRepository};
use crate::error::DomainError;

/// Rows keyed by id plus the last id handed out
///
/// Ids start at 1 and are never reused, like the identity sequence in
/// PostgreSQL.
struct Table<T> {
    rows: BTreeMap<i64, T>,
    last_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T> Table<T> {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    /// Id a saved row ends up under: its own when that row exists,
    /// otherwise a fresh one
    fn save_id(&mut self, requested: Option<i64>) -> i64 {
        match requested {
            Some(id) if self.rows.contains_key(&id) => id,
            _ => self.next_id(),
        }
    }

    /// Id for a pre-populated row; explicit ids are kept as given
    fn seed_id(&mut self, requested: Option<i64>) -> i64 {
        match requested {
            Some(id) => {
                self.last_id = self.last_id.max(id);
                id
            }
            None => self.next_id(),
        }
    }
}

// ============================================================================
// In-Memory Customer Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<Table<Customer>>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a customer; unsaved customers get the next id
    pub fn with_customer(self, customer: Customer) -> Self {
        {
            let mut table = self.customers.write().unwrap();
            let id = table.seed_id(customer.id.map(|id| id.0));
            table.rows.insert(id, customer.with_id(CustomerId(id)));
        }
        self
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, DomainError> {
        let table = self.customers.read().unwrap();
        Ok(table.rows.get(&id.0).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Customer>, DomainError> {
        let table = self.customers.read().unwrap();
        Ok(table.rows.values().cloned().collect())
    }

    async fn save(&self, customer: Customer) -> Result<Customer, DomainError> {
        let mut table = self.customers.write().unwrap();
        let id = table.save_id(customer.id.map(|id| id.0));
        let stored = customer.with_id(CustomerId(id));
        table.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete_by_id(&self, id: CustomerId) -> Result<(), DomainError> {
        let mut table = self.customers.write().unwrap();
        table.rows.remove(&id.0);
        Ok(())
    }
}

// ============================================================================
// In-Memory Vendor Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryVendorRepository {
    vendors: Arc<RwLock<Table<Vendor>>>,
}

impl InMemoryVendorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vendor(self, vendor: Vendor) -> Self {
        {
            let mut table = self.vendors.write().unwrap();
            let id = table.seed_id(vendor.id.map(|id| id.0));
            table.rows.insert(id, vendor.with_id(VendorId(id)));
        }
        self
    }
}

#[async_trait]
impl VendorRepository for InMemoryVendorRepository {
    async fn find_by_id(&self, id: VendorId) -> Result<Option<Vendor>, DomainError> {
        let table = self.vendors.read().unwrap();
        Ok(table.rows.get(&id.0).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Vendor>, DomainError> {
        let table = self.vendors.read().unwrap();
        Ok(table.rows.values().cloned().collect())
    }

    async fn save(&self, vendor: Vendor) -> Result<Vendor, DomainError> {
        let mut table = self.vendors.write().unwrap();
        let id = table.save_id(vendor.id.map(|id| id.0));
        let stored = vendor.with_id(VendorId(id));
        table.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete_by_id(&self, id: VendorId) -> Result<(), DomainError> {
        let mut table = self.vendors.write().unwrap();
        table.rows.remove(&id.0);
        Ok(())
    }
}

// ============================================================================
// In-Memory Category Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryCategoryRepository {
    categories: Arc<RwLock<Table<Category>>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(self, category: Category) -> Self {
        {
            let mut table = self.categories.write().unwrap();
            let id = table.seed_id(category.id.map(|id| id.0));
            table.rows.insert(id, category.with_id(CategoryId(id)));
        }
        self
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, DomainError> {
        let table = self.categories.read().unwrap();
        Ok(table.rows.get(&id.0).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError> {
        let table = self.categories.read().unwrap();
        Ok(table
            .rows
            .values()
            .find(|c| c.name.as_deref() == Some(name))
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Category>, DomainError> {
        let table = self.categories.read().unwrap();
        Ok(table.rows.values().cloned().collect())
    }

    async fn save(&self, category: Category) -> Result<Category, DomainError> {
        let mut table = self.categories.write().unwrap();
        let id = table.save_id(category.id.map(|id| id.0));
        let stored = category.with_id(CategoryId(id));
        table.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete_by_id(&self, id: CategoryId) -> Result<(), DomainError> {
        let mut table = self.categories.write().unwrap();
        table.rows.remove(&id.0);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_customer;

    #[tokio::test]
    async fn ids_are_sequential() {
        let repo = InMemoryCustomerRepository::new();

        let first = repo.save(test_customer()).await.unwrap();
        let second = repo.save(test_customer()).await.unwrap();

        assert_eq!(first.id, Some(CustomerId(1)));
        assert_eq!(second.id, Some(CustomerId(2)));
    }

    #[tokio::test]
    async fn save_with_unknown_id_assigns_fresh_id() {
        let repo = InMemoryCustomerRepository::new();

        let saved = repo
            .save(test_customer().with_id(CustomerId(i64::MAX)))
            .await
            .unwrap();
        let next = repo.save(test_customer()).await.unwrap();

        assert_eq!(saved.id, Some(CustomerId(1)));
        assert_eq!(next.id, Some(CustomerId(2)));
        assert!(repo.find_by_id(CustomerId(i64::MAX)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_with_existing_id_overwrites() {
        let repo = InMemoryCustomerRepository::new().with_customer(test_customer());

        let saved = repo
            .save(Customer::new("Sam", "Axe").with_id(CustomerId(1)))
            .await
            .unwrap();

        assert_eq!(saved.id, Some(CustomerId(1)));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
        let stored = repo.find_by_id(CustomerId(1)).await.unwrap().unwrap();
        assert_eq!(stored.firstname.as_deref(), Some("Sam"));
    }

    #[tokio::test]
    async fn seeded_id_moves_counter_forward() {
        let repo = InMemoryCustomerRepository::new()
            .with_customer(test_customer().with_id(CustomerId(10)));

        let next = repo.save(test_customer()).await.unwrap();

        assert_eq!(next.id, Some(CustomerId(11)));
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let repo = InMemoryVendorRepository::new();

        let saved = repo.save(Vendor::new("Home Fruits")).await.unwrap();
        repo.delete_by_id(saved.id.unwrap()).await.unwrap();
        let next = repo.save(Vendor::new("Home Fruits")).await.unwrap();

        assert_eq!(next.id, Some(VendorId(2)));
    }

    #[tokio::test]
    async fn overwrite_after_delete_does_not_rewind_ids() {
        let repo = InMemoryVendorRepository::new();

        let a = repo.save(Vendor::new("A")).await.unwrap();
        let b = repo.save(Vendor::new("B")).await.unwrap();
        repo.delete_by_id(b.id.unwrap()).await.unwrap();
        repo.save(Vendor::new("A2").with_id(a.id.unwrap())).await.unwrap();
        let c = repo.save(Vendor::new("C")).await.unwrap();

        assert!(c.id > b.id);
    }
}
