//! PostgreSQL adapter for CustomerRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryOrder, Set};

use crate::domain::entities::{Customer, CustomerId};
use crate::domain::ports::CustomerRepository;
use crate::entity::customers;
use crate::error::DomainError;

/// PostgreSQL implementation of CustomerRepository
pub struct PostgresCustomerRepository {
    db: DatabaseConnection,
}

impl PostgresCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn insert(&self, customer: Customer) -> Result<customers::Model, DomainError> {
        customers::ActiveModel {
            id: NotSet,
            firstname: Set(customer.firstname),
            lastname: Set(customer.lastname),
        }
        .insert(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))
    }
}

#[async_trait]
impl CustomerRepository for PostgresCustomerRepository {
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, DomainError> {
        let result = customers::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self) -> Result<Vec<Customer>, DomainError> {
        let results = customers::Entity::find()
            .order_by_asc(customers::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    /// Overwrite the row with the customer's id, or insert when there is none
    ///
    /// An id that matches no row is not reused: the customer is stored under
    /// a freshly generated id instead, so the id sequence only moves forward.
    async fn save(&self, customer: Customer) -> Result<Customer, DomainError> {
        let Some(id) = customer.id else {
            return Ok(self.insert(customer).await?.into());
        };

        let updated = customers::ActiveModel {
            id: Set(id.0),
            firstname: Set(customer.firstname.clone()),
            lastname: Set(customer.lastname.clone()),
        }
        .update(&self.db)
        .await;

        let model = match updated {
            Ok(model) => model,
            Err(DbErr::RecordNotUpdated) => self.insert(customer).await?,
            Err(e) => return Err(DomainError::Database(e.to_string())),
        };

        Ok(model.into())
    }

    async fn delete_by_id(&self, id: CustomerId) -> Result<(), DomainError> {
        customers::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<customers::Model> for Customer {
    fn from(model: customers::Model) -> Self {
        Customer {
            id: Some(CustomerId(model.id)),
            firstname: model.firstname,
            lastname: model.lastname,
        }
    }
}
