//! Table bootstrap
//!
//! Creates each table from its SeaORM entity definition when it does not
//! exist yet. Existing tables are left untouched.

use sea_orm::{ConnectionTrait, DatabaseConnection, EntityName, EntityTrait, Schema};

use crate::entity::{categories, customers, vendors};
use crate::error::DomainError;

/// Create every table the API needs
pub async fn ensure_tables(db: &DatabaseConnection) -> Result<(), DomainError> {
    create_table(db, customers::Entity).await?;
    create_table(db, vendors::Entity).await?;
    create_table(db, categories::Entity).await?;
    Ok(())
}

async fn create_table<E: EntityTrait>(
    db: &DatabaseConnection,
    entity: E,
) -> Result<(), DomainError> {
    let table = entity.table_name().to_owned();
    let backend = db.get_database_backend();
    let mut stmt = Schema::new(backend).create_table_from_entity(entity);
    stmt.if_not_exists();

    db.execute(backend.build(&stmt))
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

    tracing::debug!("Ensured table {}", table);
    Ok(())
}
