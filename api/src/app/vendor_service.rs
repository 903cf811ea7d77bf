//! Vendor service

use std::sync::Arc;

use crate::domain::entities::VendorId;
use crate::domain::ports::VendorRepository;
use crate::dto::VendorDto;
use crate::error::{AppError, DomainError};

/// Service for managing vendors
pub struct VendorService<R>
where
    R: VendorRepository + ?Sized,
{
    vendors: Arc<R>,
}

impl<R> VendorService<R>
where
    R: VendorRepository + ?Sized,
{
    pub fn new(vendors: Arc<R>) -> Self {
        Self { vendors }
    }

    pub async fn list_all(&self) -> Result<Vec<VendorDto>, AppError> {
        let vendors = self.vendors.find_all().await?;
        Ok(vendors.into_iter().map(VendorDto::from).collect())
    }

    pub async fn get_by_id(&self, id: VendorId) -> Result<VendorDto, AppError> {
        self.vendors
            .find_by_id(id)
            .await?
            .map(VendorDto::from)
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, dto: VendorDto) -> Result<VendorDto, AppError> {
        let saved = self.vendors.save(dto.into_entity()).await?;
        tracing::debug!(id = ?saved.id, "Created vendor");
        Ok(saved.into())
    }

    /// Replace the vendor, or store it under a new id when `id` is unknown
    pub async fn update_full(&self, id: VendorId, dto: VendorDto) -> Result<VendorDto, AppError> {
        let saved = self.vendors.save(dto.into_entity().with_id(id)).await?;
        tracing::debug!(requested = %id, id = ?saved.id, "Replaced vendor");
        Ok(saved.into())
    }

    pub async fn update_partial(
        &self,
        id: VendorId,
        dto: VendorDto,
    ) -> Result<VendorDto, AppError> {
        let existing = self
            .vendors
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        let saved = self.vendors.save(dto.merge_into(existing)).await?;
        tracing::debug!(%id, "Patched vendor");
        Ok(saved.into())
    }

    pub async fn delete_by_id(&self, id: VendorId) -> Result<(), AppError> {
        self.vendors.delete_by_id(id).await?;
        tracing::debug!(%id, "Deleted vendor");
        Ok(())
    }
}

fn not_found(id: VendorId) -> AppError {
    AppError::Domain(DomainError::NotFound(format!("Vendor {}", id)))
}
