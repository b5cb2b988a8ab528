use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::TransportMode;

/// A freight leg moving material for an assessment.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TransportRecord {
    pub id: i64,
    pub assessment_id: i64,
    pub distance_km: Option<f64>,
    /// `truck`, `rail` or `ship`. Unknown modes fall back to the truck factor.
    pub mode: String,
    pub load_capacity_tons: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TransportRecord {
    #[must_use]
    pub fn transport_mode(&self) -> Option<TransportMode> {
        TransportMode::parse(&self.mode)
    }
}
