//! Material record repository.

use chrono::Utc;

use lca_core::entities::MaterialRecord;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_f64, get_opt_string, opt_f64_value, parse_datetime};
use crate::service::LcaService;

const SELECT_COLS: &str =
    "id, assessment_id, ore_grade_pct, extraction_method, quantity_tons, created_at, updated_at";

fn row_to_material(row: &libsql::Row) -> Result<MaterialRecord, DatabaseError> {
    Ok(MaterialRecord {
        id: row.get(0)?,
        assessment_id: row.get(1)?,
        ore_grade_pct: get_opt_f64(row, 2)?,
        extraction_method: get_opt_string(row, 3)?,
        quantity_tons: get_opt_f64(row, 4)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
        updated_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

impl LcaService {
    pub async fn create_material(
        &self,
        assessment_id: i64,
        ore_grade_pct: Option<f64>,
        extraction_method: Option<&str>,
        quantity_tons: Option<f64>,
    ) -> Result<MaterialRecord, DatabaseError> {
        let now = Utc::now();

        self.db()
            .conn()
            .execute(
                "INSERT INTO material_records
                 (assessment_id, ore_grade_pct, extraction_method, quantity_tons, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                libsql::params![
                    assessment_id,
                    opt_f64_value(ore_grade_pct),
                    extraction_method,
                    opt_f64_value(quantity_tons),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(MaterialRecord {
            id: self.db().conn().last_insert_rowid(),
            assessment_id,
            ore_grade_pct,
            extraction_method: extraction_method.map(String::from),
            quantity_tons,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_material(&self, id: i64) -> Result<MaterialRecord, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM material_records WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_material(&row)
    }

    /// All material records of an assessment, oldest first.
    pub async fn list_materials_for_assessment(
        &self,
        assessment_id: i64,
    ) -> Result<Vec<MaterialRecord>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM material_records WHERE assessment_id = ?1 ORDER BY id"
                ),
                [assessment_id],
            )
            .await?;

        let mut materials = Vec::new();
        while let Some(row) = rows.next().await? {
            materials.push(row_to_material(&row)?);
        }
        Ok(materials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{create_test_assessment, test_service};

    #[tokio::test]
    async fn create_material_roundtrip() {
        let svc = test_service().await;
        let assessment = create_test_assessment(&svc, "copper").await;

        let material = svc
            .create_material(assessment.id, Some(0.8), Some("underground"), Some(120.5))
            .await
            .unwrap();

        let fetched = svc.get_material(material.id).await.unwrap();
        assert_eq!(fetched.assessment_id, assessment.id);
        assert_eq!(fetched.ore_grade_pct, Some(0.8));
        assert_eq!(fetched.extraction_method.as_deref(), Some("underground"));
        assert_eq!(fetched.quantity_tons, Some(120.5));
    }

    #[tokio::test]
    async fn nullable_fields_stay_null() {
        let svc = test_service().await;
        let assessment = create_test_assessment(&svc, "steel").await;

        let material = svc
            .create_material(assessment.id, None, None, None)
            .await
            .unwrap();
        let fetched = svc.get_material(material.id).await.unwrap();
        assert!(fetched.ore_grade_pct.is_none());
        assert!(fetched.extraction_method.is_none());
        assert!(fetched.quantity_tons.is_none());
    }

    #[tokio::test]
    async fn list_scoped_to_assessment_in_id_order() {
        let svc = test_service().await;
        let a = create_test_assessment(&svc, "steel").await;
        let b = create_test_assessment(&svc, "steel").await;

        let first = svc.create_material(a.id, None, None, Some(1.0)).await.unwrap();
        svc.create_material(b.id, None, None, Some(2.0)).await.unwrap();
        let third = svc.create_material(a.id, None, None, Some(3.0)).await.unwrap();

        let listed = svc.list_materials_for_assessment(a.id).await.unwrap();
        let ids: Vec<i64> = listed.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![first.id, third.id]);
    }

    #[tokio::test]
    async fn orphan_material_rejected() {
        let svc = test_service().await;
        let result = svc.create_material(77, None, None, Some(1.0)).await;
        assert!(result.is_err());
    }
}
