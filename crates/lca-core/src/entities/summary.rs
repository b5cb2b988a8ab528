use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The single aggregated footprint of an assessment.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ImpactSummary {
    pub id: i64,
    pub assessment_id: i64,
    pub co2_emissions_tons: f64,
    pub total_energy_kwh: f64,
    pub total_water_m3: f64,
    pub total_waste_tons: f64,
    pub calculated_at: DateTime<Utc>,
}
