//! Processing record update builder.

use serde::Serialize;

use lca_core::enums::MeasurementField;

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ProcessingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_consumption_kwh: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_usage_m3: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waste_generation_tons: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment_efficiency_pct: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_estimated: Option<bool>,
}

pub struct ProcessingUpdateBuilder(ProcessingUpdate);

impl ProcessingUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ProcessingUpdate::default())
    }

    #[must_use]
    pub fn energy_consumption_kwh(mut self, value: Option<f64>) -> Self {
        self.0.energy_consumption_kwh = Some(value);
        self
    }

    #[must_use]
    pub fn water_usage_m3(mut self, value: Option<f64>) -> Self {
        self.0.water_usage_m3 = Some(value);
        self
    }

    #[must_use]
    pub fn waste_generation_tons(mut self, value: Option<f64>) -> Self {
        self.0.waste_generation_tons = Some(value);
        self
    }

    #[must_use]
    pub fn equipment_efficiency_pct(mut self, value: Option<f64>) -> Self {
        self.0.equipment_efficiency_pct = Some(value);
        self
    }

    /// Set one measurement by field tag.
    #[must_use]
    pub fn measurement(self, field: MeasurementField, value: f64) -> Self {
        match field {
            MeasurementField::EnergyConsumptionKwh => self.energy_consumption_kwh(Some(value)),
            MeasurementField::WaterUsageM3 => self.water_usage_m3(Some(value)),
            MeasurementField::WasteGenerationTons => self.waste_generation_tons(Some(value)),
            MeasurementField::EquipmentEfficiencyPct => {
                self.equipment_efficiency_pct(Some(value))
            }
        }
    }

    #[must_use]
    pub fn ai_estimated(mut self, estimated: bool) -> Self {
        self.0.ai_estimated = Some(estimated);
        self
    }

    #[must_use]
    pub fn build(self) -> ProcessingUpdate {
        self.0
    }
}

impl Default for ProcessingUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
