use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::MeasurementField;

/// A processing step of an assessment with its (possibly missing) measurements.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ProcessingRecord {
    pub id: i64,
    pub assessment_id: i64,
    pub energy_consumption_kwh: Option<f64>,
    pub water_usage_m3: Option<f64>,
    pub waste_generation_tons: Option<f64>,
    pub equipment_efficiency_pct: Option<f64>,
    /// True when the last estimation run filled at least one measurement.
    pub ai_estimated: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProcessingRecord {
    #[must_use]
    pub const fn measurement(&self, field: MeasurementField) -> Option<f64> {
        match field {
            MeasurementField::EnergyConsumptionKwh => self.energy_consumption_kwh,
            MeasurementField::WaterUsageM3 => self.water_usage_m3,
            MeasurementField::WasteGenerationTons => self.waste_generation_tons,
            MeasurementField::EquipmentEfficiencyPct => self.equipment_efficiency_pct,
        }
    }

    /// Measurement fields that are currently null, in declaration order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<MeasurementField> {
        MeasurementField::ALL
            .into_iter()
            .filter(|field| self.measurement(*field).is_none())
            .collect()
    }
}
