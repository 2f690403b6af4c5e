//! Database repository for maintenance logs.

use crate::types::{MaintenanceLogInfo, NewMaintenanceLog};
use chrono::{NaiveDate, Utc};
use facilitipro_core::{MachineId, MaintenanceLogId};
use sqlx::{FromRow, PgPool};

/// Row type for maintenance log queries.
#[derive(FromRow)]
struct MaintenanceLogRow {
    log_id: i64,
    technician_name: String,
    date: String,
    total_time_spent: f64,
    comments: String,
    parts_used: String,
}

impl From<MaintenanceLogRow> for MaintenanceLogInfo {
    fn from(row: MaintenanceLogRow) -> Self {
        Self {
            log_id: MaintenanceLogId::new(row.log_id),
            technician_name: row.technician_name,
            date: row.date,
            total_time_spent: row.total_time_spent,
            comments: row.comments,
            parts_used: row.parts_used,
        }
    }
}

/// Formats a log date the way it is stored (`YYYY-MM-DD`).
pub fn format_log_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Repository for maintenance log operations.
pub struct MaintenanceLogRepository {
    pool: PgPool,
}

impl MaintenanceLogRepository {
    /// Creates a new repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists the logs recorded for a machine, oldest first.
    pub async fn list_by_machine(
        &self,
        machine_id: MachineId,
    ) -> Result<Vec<MaintenanceLogInfo>, sqlx::Error> {
        let rows: Vec<MaintenanceLogRow> = sqlx::query_as(
            r#"
            SELECT log_id, technician_name, "date", total_time_spent, comments, parts_used
            FROM maintenance_logs
            WHERE machine_id = $1
            ORDER BY log_id ASC
            "#,
        )
        .bind(machine_id.get())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(MaintenanceLogInfo::from).collect())
    }

    /// Records a log entry dated today (UTC) and returns its assigned ID.
    ///
    /// Fails with a foreign key violation if the machine does not exist.
    pub async fn create(
        &self,
        machine_id: MachineId,
        log: &NewMaintenanceLog,
    ) -> Result<MaintenanceLogId, sqlx::Error> {
        let date = format_log_date(Utc::now().date_naive());

        let (log_id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO maintenance_logs
                (machine_id, technician_name, "date", total_time_spent, comments, parts_used)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING log_id
            "#,
        )
        .bind(machine_id.get())
        .bind(&log.technician_name)
        .bind(&date)
        .bind(log.total_time_spent)
        .bind(&log.comments)
        .bind(&log.parts_used)
        .fetch_one(&self.pool)
        .await?;

        Ok(MaintenanceLogId::new(log_id))
    }

    /// Deletes a log entry.
    ///
    /// Returns false if no entry had this ID.
    pub async fn delete(&self, id: MaintenanceLogId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM maintenance_logs
            WHERE log_id = $1
            "#,
        )
        .bind(id.get())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_dates_are_iso_days() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).expect("valid date");
        assert_eq!(format_log_date(date), "2024-03-07");
    }
}
