//! Response types returned by the estimation and aggregation operations.
//!
//! These are the JSON shapes printed by `lca estimate` and `lca impacts`.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{MeasurementField, SummaryOutcome};

/// A processing record whose estimated values could not be written.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RecordFailure {
    pub record_id: i64,
    pub code: String,
    pub message: String,
}

/// Result of `lca estimate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct EstimationReport {
    pub assessment_id: i64,
    /// Records updated by this run. A record counts once however many fields it gained.
    pub estimated_count: u32,
    /// Fields filled on at least one successfully updated record.
    pub estimated_fields: BTreeSet<MeasurementField>,
    /// Within `[0.70, 0.90]`, two decimals.
    pub confidence_score: f64,
    /// Per-record write failures. Empty on a clean run.
    #[serde(default)]
    pub failures: Vec<RecordFailure>,
}

impl EstimationReport {
    /// True when some records were left unwritten.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// CO₂ contributions in tons.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Co2Breakdown {
    pub material_extraction_tons: f64,
    pub processing_tons: f64,
    pub transportation_tons: f64,
}

/// Result of `lca impacts`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ImpactComputation {
    pub assessment_id: i64,
    pub co2_emissions_tons: f64,
    pub total_energy_kwh: f64,
    pub total_water_m3: f64,
    pub total_waste_tons: f64,
    pub co2_breakdown: Co2Breakdown,
    pub calculated_at: DateTime<Utc>,
    pub outcome: SummaryOutcome,
}
