//! Processing record repository with partial measurement updates.

use chrono::Utc;

use lca_core::entities::ProcessingRecord;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_f64, opt_f64_value, parse_datetime};
use crate::service::LcaService;
use crate::updates::processing::ProcessingUpdate;

const SELECT_COLS: &str = "id, assessment_id, energy_consumption_kwh, water_usage_m3, \
     waste_generation_tons, equipment_efficiency_pct, ai_estimated, created_at, updated_at";

fn row_to_processing(row: &libsql::Row) -> Result<ProcessingRecord, DatabaseError> {
    Ok(ProcessingRecord {
        id: row.get(0)?,
        assessment_id: row.get(1)?,
        energy_consumption_kwh: get_opt_f64(row, 2)?,
        water_usage_m3: get_opt_f64(row, 3)?,
        waste_generation_tons: get_opt_f64(row, 4)?,
        equipment_efficiency_pct: get_opt_f64(row, 5)?,
        ai_estimated: row.get::<i64>(6)? != 0,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        updated_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

impl LcaService {
    /// Record a processing step as entered by a person (`ai_estimated = false`).
    pub async fn create_processing(
        &self,
        assessment_id: i64,
        energy_consumption_kwh: Option<f64>,
        water_usage_m3: Option<f64>,
        waste_generation_tons: Option<f64>,
        equipment_efficiency_pct: Option<f64>,
    ) -> Result<ProcessingRecord, DatabaseError> {
        let now = Utc::now();

        self.db()
            .conn()
            .execute(
                "INSERT INTO processing_records
                 (assessment_id, energy_consumption_kwh, water_usage_m3, waste_generation_tons,
                  equipment_efficiency_pct, ai_estimated, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, 0, ?6, ?7)",
                libsql::params![
                    assessment_id,
                    opt_f64_value(energy_consumption_kwh),
                    opt_f64_value(water_usage_m3),
                    opt_f64_value(waste_generation_tons),
                    opt_f64_value(equipment_efficiency_pct),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(ProcessingRecord {
            id: self.db().conn().last_insert_rowid(),
            assessment_id,
            energy_consumption_kwh,
            water_usage_m3,
            waste_generation_tons,
            equipment_efficiency_pct,
            ai_estimated: false,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_processing(&self, id: i64) -> Result<ProcessingRecord, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM processing_records WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_processing(&row)
    }

    /// All processing records of an assessment, oldest first.
    pub async fn list_processing_for_assessment(
        &self,
        assessment_id: i64,
    ) -> Result<Vec<ProcessingRecord>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM processing_records WHERE assessment_id = ?1 ORDER BY id"
                ),
                [assessment_id],
            )
            .await?;

        let mut records = Vec::new();
        while let Some(row) = rows.next().await? {
            records.push(row_to_processing(&row)?);
        }
        Ok(records)
    }

    /// Apply a partial update. Only `Some` fields are written; `updated_at` is
    /// refreshed whenever anything changes.
    pub async fn update_processing(
        &self,
        id: i64,
        update: &ProcessingUpdate,
    ) -> Result<ProcessingRecord, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        let measurements = [
            ("energy_consumption_kwh", update.energy_consumption_kwh),
            ("water_usage_m3", update.water_usage_m3),
            ("waste_generation_tons", update.waste_generation_tons),
            ("equipment_efficiency_pct", update.equipment_efficiency_pct),
        ];
        for (column, value) in measurements {
            if let Some(value) = value {
                sets.push(format!("{column} = ?{idx}"));
                params.push(opt_f64_value(value));
                idx += 1;
            }
        }
        if let Some(estimated) = update.ai_estimated {
            sets.push(format!("ai_estimated = ?{idx}"));
            params.push(libsql::Value::Integer(i64::from(estimated)));
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_processing(id).await;
        }

        let now = Utc::now();
        sets.push(format!("updated_at = ?{idx}"));
        params.push(now.to_rfc3339().into());
        idx += 1;

        params.push(id.into());
        let sql = format!(
            "UPDATE processing_records SET {} WHERE id = ?{idx}",
            sets.join(", ")
        );
        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }

        self.get_processing(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{create_test_assessment, test_service};
    use crate::updates::processing::ProcessingUpdateBuilder;
    use lca_core::enums::MeasurementField;

    #[tokio::test]
    async fn create_processing_roundtrip() {
        let svc = test_service().await;
        let assessment = create_test_assessment(&svc, "steel").await;

        let record = svc
            .create_processing(assessment.id, Some(2000.0), None, Some(0.3), None)
            .await
            .unwrap();
        assert!(!record.ai_estimated);

        let fetched = svc.get_processing(record.id).await.unwrap();
        assert_eq!(fetched.energy_consumption_kwh, Some(2000.0));
        assert!(fetched.water_usage_m3.is_none());
        assert_eq!(fetched.waste_generation_tons, Some(0.3));
        assert!(fetched.equipment_efficiency_pct.is_none());
        assert!(!fetched.ai_estimated);
    }

    #[tokio::test]
    async fn update_sets_only_given_fields() {
        let svc = test_service().await;
        let assessment = create_test_assessment(&svc, "steel").await;
        let record = svc
            .create_processing(assessment.id, Some(2000.0), None, None, None)
            .await
            .unwrap();

        let update = ProcessingUpdateBuilder::new()
            .measurement(MeasurementField::WaterUsageM3, 4.8)
            .ai_estimated(true)
            .build();
        let updated = svc.update_processing(record.id, &update).await.unwrap();

        assert_eq!(updated.energy_consumption_kwh, Some(2000.0));
        assert_eq!(updated.water_usage_m3, Some(4.8));
        assert!(updated.waste_generation_tons.is_none());
        assert!(updated.ai_estimated);
        assert!(updated.updated_at >= record.updated_at);
    }

    #[tokio::test]
    async fn update_can_clear_a_measurement() {
        let svc = test_service().await;
        let assessment = create_test_assessment(&svc, "copper").await;
        let record = svc
            .create_processing(assessment.id, Some(10.0), Some(1.0), None, None)
            .await
            .unwrap();

        let update = ProcessingUpdateBuilder::new().water_usage_m3(None).build();
        let updated = svc.update_processing(record.id, &update).await.unwrap();
        assert!(updated.water_usage_m3.is_none());
        assert_eq!(updated.energy_consumption_kwh, Some(10.0));
    }

    #[tokio::test]
    async fn empty_update_is_a_read() {
        let svc = test_service().await;
        let assessment = create_test_assessment(&svc, "copper").await;
        let record = svc
            .create_processing(assessment.id, Some(10.0), None, None, None)
            .await
            .unwrap();

        let same = svc
            .update_processing(record.id, &ProcessingUpdate::default())
            .await
            .unwrap();
        assert_eq!(same.updated_at, record.updated_at);
    }

    #[tokio::test]
    async fn update_missing_record() {
        let svc = test_service().await;
        let update = ProcessingUpdateBuilder::new().ai_estimated(true).build();
        let result = svc.update_processing(12345, &update).await;
        assert!(matches!(result, Err(DatabaseError::NoResult)));
    }

    #[tokio::test]
    async fn integer_affinity_reads_as_float() {
        let svc = test_service().await;
        let assessment = create_test_assessment(&svc, "steel").await;
        svc.db()
            .conn()
            .execute(
                "INSERT INTO processing_records (assessment_id, energy_consumption_kwh) VALUES (?1, 2000)",
                [assessment.id],
            )
            .await
            .unwrap();

        let records = svc
            .list_processing_for_assessment(assessment.id)
            .await
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].energy_consumption_kwh, Some(2000.0));
    }
}
