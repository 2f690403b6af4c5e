//! Database repository for facility areas.

use crate::types::{AreaInfo, NewArea};
use facilitipro_core::AreaId;
use sqlx::{FromRow, PgPool};

/// Row type for area queries.
#[derive(FromRow)]
struct AreaRow {
    area_id: i64,
    area_name: String,
}

impl From<AreaRow> for AreaInfo {
    fn from(row: AreaRow) -> Self {
        Self {
            area_id: AreaId::new(row.area_id),
            area_name: row.area_name,
        }
    }
}

/// Repository for area operations.
pub struct AreaRepository {
    pool: PgPool,
}

impl AreaRepository {
    /// Creates a new repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists all areas in creation order.
    pub async fn list(&self) -> Result<Vec<AreaInfo>, sqlx::Error> {
        let rows: Vec<AreaRow> = sqlx::query_as(
            r#"
            SELECT area_id, area_name
            FROM areas
            ORDER BY area_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(AreaInfo::from).collect())
    }

    /// Creates an area and returns its assigned ID.
    pub async fn create(&self, area: &NewArea) -> Result<AreaId, sqlx::Error> {
        let (area_id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO areas (area_name)
            VALUES ($1)
            RETURNING area_id
            "#,
        )
        .bind(&area.area_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(AreaId::new(area_id))
    }

    /// Deletes an area and, by cascade, its machines and their logs.
    ///
    /// Returns false if no area had this ID.
    pub async fn delete(&self, id: AreaId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM areas
            WHERE area_id = $1
            "#,
        )
        .bind(id.get())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
