//! Status enums and classification types for assessments and their records.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Classification enums (metal, extraction method, transport mode) also expose
//! `parse` for stored text. Matching is exact: anything other than the
//! canonical lowercase name is unknown and goes through the engine's fallback
//! rules.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// MetalType
// ---------------------------------------------------------------------------

/// Metal produced by an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MetalType {
    Aluminium,
    Copper,
    Steel,
}

impl MetalType {
    pub const ALL: [Self; 3] = [Self::Aluminium, Self::Copper, Self::Steel];

    /// Parse stored text. `None` for anything but the exact table names.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == raw)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aluminium => "aluminium",
            Self::Copper => "copper",
            Self::Steel => "steel",
        }
    }
}

impl fmt::Display for MetalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AssessmentStatus
// ---------------------------------------------------------------------------

/// Lifecycle of an assessment. Forward only.
///
/// ```text
/// draft → in_progress → completed
///       → completed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    Draft,
    InProgress,
    Completed,
}

impl AssessmentStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Draft => &[Self::InProgress, Self::Completed],
            Self::InProgress => &[Self::Completed],
            Self::Completed => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ExtractionMethod
// ---------------------------------------------------------------------------

/// How the ore (or scrap) behind a material record was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMethod {
    OpenPit,
    Underground,
    Recycled,
}

impl ExtractionMethod {
    pub const ALL: [Self; 3] = [Self::OpenPit, Self::Underground, Self::Recycled];

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == raw)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OpenPit => "open_pit",
            Self::Underground => "underground",
            Self::Recycled => "recycled",
        }
    }
}

impl fmt::Display for ExtractionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TransportMode
// ---------------------------------------------------------------------------

/// Freight mode of a transport leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Truck,
    Rail,
    Ship,
}

impl TransportMode {
    pub const ALL: [Self; 3] = [Self::Truck, Self::Rail, Self::Ship];

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == raw)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Truck => "truck",
            Self::Rail => "rail",
            Self::Ship => "ship",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MeasurementField
// ---------------------------------------------------------------------------

/// The four nullable processing measurements the estimator may fill.
///
/// Ordering follows declaration order so sets of fields serialize stably.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementField {
    EnergyConsumptionKwh,
    WaterUsageM3,
    WasteGenerationTons,
    EquipmentEfficiencyPct,
}

impl MeasurementField {
    pub const ALL: [Self; 4] = [
        Self::EnergyConsumptionKwh,
        Self::WaterUsageM3,
        Self::WasteGenerationTons,
        Self::EquipmentEfficiencyPct,
    ];

    /// Column name in the `processing_records` table.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EnergyConsumptionKwh => "energy_consumption_kwh",
            Self::WaterUsageM3 => "water_usage_m3",
            Self::WasteGenerationTons => "waste_generation_tons",
            Self::EquipmentEfficiencyPct => "equipment_efficiency_pct",
        }
    }
}

impl fmt::Display for MeasurementField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SummaryOutcome
// ---------------------------------------------------------------------------

/// Whether an impact summary upsert inserted a new row or overwrote one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SummaryOutcome {
    Created,
    Replaced,
}

impl SummaryOutcome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Replaced => "replaced",
        }
    }
}

impl fmt::Display for SummaryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
