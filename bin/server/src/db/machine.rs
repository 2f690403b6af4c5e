//! Database repository for machines.

use crate::types::{MachineInfo, NewMachine};
use facilitipro_core::{AreaId, MachineId};
use sqlx::{FromRow, PgPool};

/// Row type for machine queries.
#[derive(FromRow)]
struct MachineRow {
    machine_id: i64,
    machine_name: String,
    asset_number: String,
    location: String,
    last_maintenance_date: String,
}

impl From<MachineRow> for MachineInfo {
    fn from(row: MachineRow) -> Self {
        Self {
            machine_id: MachineId::new(row.machine_id),
            machine_name: row.machine_name,
            asset_number: row.asset_number,
            location: row.location,
            last_maintenance_date: row.last_maintenance_date,
        }
    }
}

/// Repository for machine operations.
pub struct MachineRepository {
    pool: PgPool,
}

impl MachineRepository {
    /// Creates a new repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists the machines in an area.
    ///
    /// An unknown area simply has no machines.
    pub async fn list_by_area(&self, area_id: AreaId) -> Result<Vec<MachineInfo>, sqlx::Error> {
        let rows: Vec<MachineRow> = sqlx::query_as(
            r#"
            SELECT machine_id, machine_name, asset_number, location, last_maintenance_date
            FROM machines
            WHERE area_id = $1
            ORDER BY machine_id ASC
            "#,
        )
        .bind(area_id.get())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(MachineInfo::from).collect())
    }

    /// Creates a machine in an area and returns its assigned ID.
    ///
    /// Fails with a foreign key violation if the area does not exist and
    /// with a unique violation if the asset number is taken.
    pub async fn create(
        &self,
        area_id: AreaId,
        machine: &NewMachine,
    ) -> Result<MachineId, sqlx::Error> {
        let (machine_id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO machines
                (area_id, machine_name, asset_number, location, last_maintenance_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING machine_id
            "#,
        )
        .bind(area_id.get())
        .bind(&machine.machine_name)
        .bind(&machine.asset_number)
        .bind(&machine.location)
        .bind(&machine.last_maintenance_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(MachineId::new(machine_id))
    }

    /// Deletes a machine and, by cascade, its maintenance logs.
    ///
    /// Returns false if no machine had this ID.
    pub async fn delete(&self, id: MachineId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM machines
            WHERE machine_id = $1
            "#,
        )
        .bind(id.get())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
