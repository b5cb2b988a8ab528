//! Transport record repository.

use chrono::Utc;

use lca_core::entities::TransportRecord;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_f64, opt_f64_value, parse_datetime};
use crate::service::LcaService;

const SELECT_COLS: &str =
    "id, assessment_id, distance_km, mode, load_capacity_tons, created_at, updated_at";

fn row_to_transport(row: &libsql::Row) -> Result<TransportRecord, DatabaseError> {
    Ok(TransportRecord {
        id: row.get(0)?,
        assessment_id: row.get(1)?,
        distance_km: get_opt_f64(row, 2)?,
        mode: row.get(3)?,
        load_capacity_tons: get_opt_f64(row, 4)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
        updated_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

impl LcaService {
    pub async fn create_transport(
        &self,
        assessment_id: i64,
        mode: &str,
        distance_km: Option<f64>,
        load_capacity_tons: Option<f64>,
    ) -> Result<TransportRecord, DatabaseError> {
        let now = Utc::now();

        self.db()
            .conn()
            .execute(
                "INSERT INTO transport_records
                 (assessment_id, distance_km, mode, load_capacity_tons, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                libsql::params![
                    assessment_id,
                    opt_f64_value(distance_km),
                    mode,
                    opt_f64_value(load_capacity_tons),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(TransportRecord {
            id: self.db().conn().last_insert_rowid(),
            assessment_id,
            distance_km,
            mode: mode.to_string(),
            load_capacity_tons,
            created_at: now,
            updated_at: now,
        })
    }

    /// All transport legs of an assessment, oldest first.
    pub async fn list_transports_for_assessment(
        &self,
        assessment_id: i64,
    ) -> Result<Vec<TransportRecord>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM transport_records WHERE assessment_id = ?1 ORDER BY id"
                ),
                [assessment_id],
            )
            .await?;

        let mut legs = Vec::new();
        while let Some(row) = rows.next().await? {
            legs.push(row_to_transport(&row)?);
        }
        Ok(legs)
    }
}
