//! Customer service
//!
//! Maps between customer DTOs and entities and delegates persistence to the
//! repository. Resource URLs are derived from the stored id.

use std::sync::Arc;

use crate::domain::entities::CustomerId;
use crate::domain::ports::CustomerRepository;
use crate::dto::CustomerDto;
use crate::error::{AppError, DomainError};

/// Service for managing customers
pub struct CustomerService<R>
where
    R: CustomerRepository + ?Sized,
{
    customers: Arc<R>,
}

impl<R> CustomerService<R>
where
    R: CustomerRepository + ?Sized,
{
    pub fn new(customers: Arc<R>) -> Self {
        Self { customers }
    }

    /// List every customer
    pub async fn list_all(&self) -> Result<Vec<CustomerDto>, AppError> {
        let customers = self.customers.find_all().await?;
        Ok(customers.into_iter().map(CustomerDto::from).collect())
    }

    /// Get a customer by ID
    pub async fn get_by_id(&self, id: CustomerId) -> Result<CustomerDto, AppError> {
        self.customers
            .find_by_id(id)
            .await?
            .map(CustomerDto::from)
            .ok_or_else(|| not_found(id))
    }

    /// Create a customer from client input
    ///
    /// Any identity the client sent is ignored; the store assigns one.
    pub async fn create(&self, dto: CustomerDto) -> Result<CustomerDto, AppError> {
        let saved = self.customers.save(dto.into_entity()).await?;
        tracing::debug!(id = ?saved.id, "Created customer");
        Ok(saved.into())
    }

    /// Replace every field of a customer
    ///
    /// When no customer has this id, the input is stored as a new customer
    /// and the returned URL carries the id the store assigned.
    pub async fn update_full(
        &self,
        id: CustomerId,
        dto: CustomerDto,
    ) -> Result<CustomerDto, AppError> {
        let saved = self.customers.save(dto.into_entity().with_id(id)).await?;
        tracing::debug!(requested = %id, id = ?saved.id, "Replaced customer");
        Ok(saved.into())
    }

    /// Overwrite only the fields set in `dto`
    pub async fn update_partial(
        &self,
        id: CustomerId,
        dto: CustomerDto,
    ) -> Result<CustomerDto, AppError> {
        let existing = self
            .customers
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        let saved = self.customers.save(dto.merge_into(existing)).await?;
        tracing::debug!(%id, "Patched customer");
        Ok(saved.into())
    }

    /// Delete a customer. Unknown ids are not an error.
    pub async fn delete_by_id(&self, id: CustomerId) -> Result<(), AppError> {
        self.customers.delete_by_id(id).await?;
        tracing::debug!(%id, "Deleted customer");
        Ok(())
    }
}

fn not_found(id: CustomerId) -> AppError {
    AppError::Domain(DomainError::NotFound(format!("Customer {}", id)))
}
