//! PostgreSQL adapter for CategoryRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::entities::{Category, CategoryId};
use crate::domain::ports::CategoryRepository;
use crate::entity::categories;
use crate::error::DomainError;

/// PostgreSQL implementation of CategoryRepository
pub struct PostgresCategoryRepository {
    db: DatabaseConnection,
}

impl PostgresCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn insert(&self, name: Option<String>) -> Result<categories::Model, DomainError> {
        categories::ActiveModel {
            id: NotSet,
            name: Set(name),
        }
        .insert(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, DomainError> {
        let result = categories::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError> {
        let result = categories::Entity::find()
            .filter(categories::Column::Name.eq(name))
            .order_by_asc(categories::Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self) -> Result<Vec<Category>, DomainError> {
        let results = categories::Entity::find()
            .order_by_asc(categories::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn save(&self, category: Category) -> Result<Category, DomainError> {
        let Some(id) = category.id else {
            return Ok(self.insert(category.name).await?.into());
        };

        let updated = categories::ActiveModel {
            id: Set(id.0),
            name: Set(category.name.clone()),
        }
        .update(&self.db)
        .await;

        let model = match updated {
            Ok(model) => model,
            Err(DbErr::RecordNotUpdated) => self.insert(category.name).await?,
            Err(e) => return Err(DomainError::Database(e.to_string())),
        };

        Ok(model.into())
    }

    async fn delete_by_id(&self, id: CategoryId) -> Result<(), DomainError> {
        categories::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<categories::Model> for Category {
    fn from(model: categories::Model) -> Self {
        Category {
            id: Some(CategoryId(model.id)),
            name: model.name,
        }
    }
}
