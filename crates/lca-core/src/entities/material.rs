use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ExtractionMethod;

/// Raw material input of an assessment.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MaterialRecord {
    pub id: i64,
    pub assessment_id: i64,
    /// Ore grade in percent metal content.
    pub ore_grade_pct: Option<f64>,
    /// `open_pit`, `underground` or `recycled`. Other text is treated as unknown.
    pub extraction_method: Option<String>,
    pub quantity_tons: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MaterialRecord {
    #[must_use]
    pub fn extraction(&self) -> Option<ExtractionMethod> {
        self.extraction_method.as_deref().and_then(ExtractionMethod::parse)
    }
}
