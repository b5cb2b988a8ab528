use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AssessmentStatus, MetalType};

/// One LCA project for a given metal.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Assessment {
    pub id: i64,
    pub project_name: String,
    /// Stored as text. Values outside [`MetalType`] are kept verbatim.
    pub metal_type: String,
    pub status: AssessmentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Assessment {
    /// The recognised metal, or `None` when the stored text is unsupported.
    #[must_use]
    pub fn metal(&self) -> Option<MetalType> {
        MetalType::parse(&self.metal_type)
    }
}
