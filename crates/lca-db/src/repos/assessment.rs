//! Assessment repository with forward-only status transitions.

use chrono::Utc;

use lca_core::entities::Assessment;
use lca_core::enums::AssessmentStatus;

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_enum};
use crate::service::LcaService;

const SELECT_COLS: &str = "id, project_name, metal_type, status, created_at, updated_at";

fn row_to_assessment(row: &libsql::Row) -> Result<Assessment, DatabaseError> {
    Ok(Assessment {
        id: row.get(0)?,
        project_name: row.get(1)?,
        metal_type: row.get(2)?,
        status: parse_enum(&row.get::<String>(3)?)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
        updated_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl LcaService {
    /// Create a draft assessment. `metal_type` is stored verbatim.
    pub async fn create_assessment(
        &self,
        project_name: &str,
        metal_type: &str,
    ) -> Result<Assessment, DatabaseError> {
        let now = Utc::now();

        self.db()
            .conn()
            .execute(
                "INSERT INTO assessments (project_name, metal_type, status, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    project_name,
                    metal_type,
                    AssessmentStatus::Draft.as_str(),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(Assessment {
            id: self.db().conn().last_insert_rowid(),
            project_name: project_name.to_string(),
            metal_type: metal_type.to_string(),
            status: AssessmentStatus::Draft,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_assessment(&self, id: i64) -> Result<Assessment, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM assessments WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_assessment(&row)
    }

    pub async fn list_assessments(&self, limit: u32) -> Result<Vec<Assessment>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM assessments ORDER BY id DESC LIMIT ?1"),
                [limit],
            )
            .await?;

        let mut assessments = Vec::new();
        while let Some(row) = rows.next().await? {
            assessments.push(row_to_assessment(&row)?);
        }
        Ok(assessments)
    }

    /// Move an assessment to `new_status`, rejecting backwards transitions.
    pub async fn update_assessment_status(
        &self,
        id: i64,
        new_status: AssessmentStatus,
    ) -> Result<Assessment, DatabaseError> {
        let current = self.get_assessment(id).await?;

        if !current.status.can_transition_to(new_status) {
            return Err(DatabaseError::InvalidState(format!(
                "Cannot transition assessment {} from {} to {}",
                id, current.status, new_status
            )));
        }

        let now = Utc::now();
        self.db()
            .conn()
            .execute(
                "UPDATE assessments SET status = ?1, updated_at = ?2 WHERE id = ?3",
                libsql::params![new_status.as_str(), now.to_rfc3339(), id],
            )
            .await?;

        Ok(Assessment {
            status: new_status,
            updated_at: now,
            ..current
        })
    }

    /// Mark an assessment completed unless it already is.
    ///
    /// Returns `true` when the status changed. The guard lives in the UPDATE
    /// itself so a completed assessment is never touched.
    pub async fn advance_to_completed(&self, id: i64) -> Result<bool, DatabaseError> {
        let now = Utc::now();
        let changed = self
            .db()
            .conn()
            .execute(
                "UPDATE assessments SET status = ?1, updated_at = ?2 WHERE id = ?3 AND status != ?1",
                libsql::params![AssessmentStatus::Completed.as_str(), now.to_rfc3339(), id],
            )
            .await?;
        Ok(changed > 0)
    }
}
