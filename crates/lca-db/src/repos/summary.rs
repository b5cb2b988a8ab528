//! Impact summary repository: one row per assessment, upserted atomically.

use chrono::{DateTime, Utc};

use lca_core::entities::ImpactSummary;
use lca_core::enums::SummaryOutcome;

use crate::error::DatabaseError;
use crate::helpers::{get_f64, parse_datetime};
use crate::service::LcaService;

const SELECT_COLS: &str = "id, assessment_id, co2_emissions_tons, total_energy_kwh, \
     total_water_m3, total_waste_tons, calculated_at";

/// Aggregated totals to persist for an assessment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryFigures {
    pub co2_emissions_tons: f64,
    pub total_energy_kwh: f64,
    pub total_water_m3: f64,
    pub total_waste_tons: f64,
    pub calculated_at: DateTime<Utc>,
}

fn row_to_summary(row: &libsql::Row) -> Result<ImpactSummary, DatabaseError> {
    Ok(ImpactSummary {
        id: row.get(0)?,
        assessment_id: row.get(1)?,
        co2_emissions_tons: get_f64(row, 2)?,
        total_energy_kwh: get_f64(row, 3)?,
        total_water_m3: get_f64(row, 4)?,
        total_waste_tons: get_f64(row, 5)?,
        calculated_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

impl LcaService {
    /// Insert or overwrite the summary of an assessment.
    ///
    /// The existence check and the write share one transaction.
    pub async fn upsert_summary(
        &self,
        assessment_id: i64,
        figures: &SummaryFigures,
    ) -> Result<(ImpactSummary, SummaryOutcome), DatabaseError> {
        let tx = self.db().conn().transaction().await?;

        let existed = {
            let mut rows = tx
                .query(
                    "SELECT 1 FROM impact_summaries WHERE assessment_id = ?1",
                    [assessment_id],
                )
                .await?;
            rows.next().await?.is_some()
        };

        tx.execute(
            "INSERT INTO impact_summaries
             (assessment_id, co2_emissions_tons, total_energy_kwh, total_water_m3,
              total_waste_tons, calculated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT(assessment_id) DO UPDATE SET
                co2_emissions_tons = excluded.co2_emissions_tons,
                total_energy_kwh = excluded.total_energy_kwh,
                total_water_m3 = excluded.total_water_m3,
                total_waste_tons = excluded.total_waste_tons,
                calculated_at = excluded.calculated_at",
            libsql::params![
                assessment_id,
                figures.co2_emissions_tons,
                figures.total_energy_kwh,
                figures.total_water_m3,
                figures.total_waste_tons,
                figures.calculated_at.to_rfc3339()
            ],
        )
        .await?;

        let summary = {
            let mut rows = tx
                .query(
                    &format!("SELECT {SELECT_COLS} FROM impact_summaries WHERE assessment_id = ?1"),
                    [assessment_id],
                )
                .await?;
            let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
            row_to_summary(&row)?
        };

        tx.commit().await?;

        let outcome = if existed {
            SummaryOutcome::Replaced
        } else {
            SummaryOutcome::Created
        };
        tracing::debug!(assessment_id, %outcome, "impact summary stored");
        Ok((summary, outcome))
    }

    pub async fn get_summary(&self, assessment_id: i64) -> Result<ImpactSummary, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM impact_summaries WHERE assessment_id = ?1"),
                [assessment_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_summary(&row)
    }
}
