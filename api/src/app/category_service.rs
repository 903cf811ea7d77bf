//! Category service

use std::sync::Arc;

use crate::domain::entities::CategoryId;
use crate::domain::ports::CategoryRepository;
use crate::dto::CategoryDto;
use crate::error::{AppError, DomainError};

/// Service for managing categories
pub struct CategoryService<R>
where
    R: CategoryRepository + ?Sized,
{
    categories: Arc<R>,
}

impl<R> CategoryService<R>
where
    R: CategoryRepository + ?Sized,
{
    pub fn new(categories: Arc<R>) -> Self {
        Self { categories }
    }

    pub async fn list_all(&self) -> Result<Vec<CategoryDto>, AppError> {
        let categories = self.categories.find_all().await?;
        Ok(categories.into_iter().map(CategoryDto::from).collect())
    }

    pub async fn get_by_id(&self, id: CategoryId) -> Result<CategoryDto, AppError> {
        self.categories
            .find_by_id(id)
            .await?
            .map(CategoryDto::from)
            .ok_or_else(|| AppError::Domain(DomainError::NotFound(format!("Category {}", id))))
    }

    /// Look a category up by its exact name
    pub async fn get_by_name(&self, name: &str) -> Result<CategoryDto, AppError> {
        self.categories
            .find_by_name(name)
            .await?
            .map(CategoryDto::from)
            .ok_or_else(|| {
                AppError::Domain(DomainError::NotFound(format!("Category '{}'", name)))
            })
    }

    pub async fn create(&self, dto: CategoryDto) -> Result<CategoryDto, AppError> {
        let saved = self.categories.save(dto.into_entity()).await?;
        tracing::debug!(id = ?saved.id, "Created category");
        Ok(saved.into())
    }

    pub async fn update_full(
        &self,
        id: CategoryId,
        dto: CategoryDto,
    ) -> Result<CategoryDto, AppError> {
        let saved = self.categories.save(dto.into_entity().with_id(id)).await?;
        tracing::debug!(requested = %id, id = ?saved.id, "Replaced category");
        Ok(saved.into())
    }

    pub async fn update_partial(
        &self,
        id: CategoryId,
        dto: CategoryDto,
    ) -> Result<CategoryDto, AppError> {
        let existing = self
            .categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Domain(DomainError::NotFound(format!("Category {}", id))))?;

        let saved = self.categories.save(dto.merge_into(existing)).await?;
        tracing::debug!(%id, "Patched category");
        Ok(saved.into())
    }

    pub async fn delete_by_id(&self, id: CategoryId) -> Result<(), AppError> {
        self.categories.delete_by_id(id).await?;
        tracing::debug!(%id, "Deleted category");
        Ok(())
    }
}
