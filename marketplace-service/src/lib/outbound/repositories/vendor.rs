use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::vendor::errors::VendorError;
use crate::vendor::models::Vendor;
use crate::vendor::models::VendorId;
use crate::vendor::models::VendorName;
use crate::vendor::ports::VendorRepository;

#[derive(FromRow)]
struct VendorRow {
    id: Uuid,
    name: String,
    description: String,
    img: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<VendorRow> for Vendor {
    type Error = VendorError;

    fn try_from(row: VendorRow) -> Result<Self, Self::Error> {
        Ok(Vendor {
            id: VendorId(row.id),
            name: VendorName::new(&row.name)?,
            description: row.description,
            img: row.img,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

pub struct PostgresVendorRepository {
    pool: PgPool,
}

impl PostgresVendorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VendorRepository for PostgresVendorRepository {
    async fn create(&self, vendor: Vendor) -> Result<Vendor, VendorError> {
        sqlx::query(
            r#"
            INSERT INTO vendors (id, name, description, img, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(vendor.id.0)
        .bind(vendor.name.as_str())
        .bind(&vendor.description)
        .bind(vendor.img.as_deref())
        .bind(vendor.created_at)
        .bind(vendor.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| VendorError::DatabaseError(e.to_string()))?;

        Ok(vendor)
    }

    async fn find_by_id(&self, id: &VendorId) -> Result<Option<Vendor>, VendorError> {
        let row = sqlx::query_as::<_, VendorRow>(
            r#"
            SELECT id, name, description, img, created_at, updated_at
            FROM vendors
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| VendorError::DatabaseError(e.to_string()))?;

        row.map(Vendor::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Vendor>, VendorError> {
        let rows = sqlx::query_as::<_, VendorRow>(
            r#"
            SELECT id, name, description, img, created_at, updated_at
            FROM vendors
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| VendorError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Vendor::try_from).collect()
    }

    async fn update(&self, vendor: Vendor) -> Result<Vendor, VendorError> {
        let result = sqlx::query(
            r#"
            UPDATE vendors
            SET name = $2, description = $3, img = $4, updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(vendor.id.0)
        .bind(vendor.name.as_str())
        .bind(&vendor.description)
        .bind(vendor.img.as_deref())
        .bind(vendor.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| VendorError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(VendorError::NotFound(vendor.id.to_string()));
        }

        Ok(vendor)
    }

    async fn delete(&self, id: &VendorId) -> Result<(), VendorError> {
        let result = sqlx::query("DELETE FROM vendors WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| VendorError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(VendorError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
