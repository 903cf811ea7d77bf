//! PostgreSQL adapter for VendorRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryOrder, Set};

use crate::domain::entities::{Vendor, VendorId};
use crate::domain::ports::VendorRepository;
use crate::entity::vendors;
use crate::error::DomainError;

/// PostgreSQL implementation of VendorRepository
pub struct PostgresVendorRepository {
    db: DatabaseConnection,
}

impl PostgresVendorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn insert(&self, name: Option<String>) -> Result<vendors::Model, DomainError> {
        vendors::ActiveModel {
            id: NotSet,
            name: Set(name),
        }
        .insert(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))
    }
}

#[async_trait]
impl VendorRepository for PostgresVendorRepository {
    async fn find_by_id(&self, id: VendorId) -> Result<Option<Vendor>, DomainError> {
        let result = vendors::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self) -> Result<Vec<Vendor>, DomainError> {
        let results = vendors::Entity::find()
            .order_by_asc(vendors::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn save(&self, vendor: Vendor) -> Result<Vendor, DomainError> {
        let Some(id) = vendor.id else {
            return Ok(self.insert(vendor.name).await?.into());
        };

        let updated = vendors::ActiveModel {
            id: Set(id.0),
            name: Set(vendor.name.clone()),
        }
        .update(&self.db)
        .await;

        let model = match updated {
            Ok(model) => model,
            // No row holds that id; the store assigns a fresh one
            Err(DbErr::RecordNotUpdated) => self.insert(vendor.name).await?,
            Err(e) => return Err(DomainError::Database(e.to_string())),
        };

        Ok(model.into())
    }

    async fn delete_by_id(&self, id: VendorId) -> Result<(), DomainError> {
        vendors::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<vendors::Model> for Vendor {
    fn from(model: vendors::Model) -> Self {
        Vendor {
            id: Some(VendorId(model.id)),
            name: model.name,
        }
    }
}
