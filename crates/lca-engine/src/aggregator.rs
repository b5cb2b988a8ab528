//! Impact aggregation.
//!
//! CO₂ is accounted in three parts:
//! - material extraction: `quantity_tons × energy intensity (kWh/kg) × grid factor`, in kg
//! - processing: `total energy kWh × grid factor`, in kg
//! - transportation: `distance × load × mode factor / 1000`, in tons
//!
//! The result is stored as the assessment's single summary and the assessment
//! is marked completed.

use chrono::Utc;

use lca_core::entities::{MaterialRecord, ProcessingRecord, TransportRecord};
use lca_core::enums::MetalType;
use lca_core::factors::FactorTables;
use lca_core::ids::validate_assessment_id;
use lca_core::responses::{Co2Breakdown, ImpactComputation};
use lca_db::repos::summary::SummaryFigures;
use lca_db::service::LcaService;

use crate::error::EngineError;
use crate::rounding::round_to;

const KG_PER_TON: f64 = 1000.0;

/// Rounded totals of one assessment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactTotals {
    pub co2_emissions_tons: f64,
    pub total_energy_kwh: f64,
    pub total_water_m3: f64,
    pub total_waste_tons: f64,
    pub co2_breakdown: Co2Breakdown,
}

/// Pure aggregation over already-loaded records. Null measurements count as zero.
///
/// Unsupported metals (`None`) silently use the fallback energy intensity.
#[must_use]
pub fn aggregate(
    metal: Option<MetalType>,
    materials: &[MaterialRecord],
    processing: &[ProcessingRecord],
    transports: &[TransportRecord],
    factors: &FactorTables,
) -> ImpactTotals {
    let grid = factors.grid_emission_factor;
    let intensity = factors.energy_intensity.for_metal(metal);

    let total_energy_kwh: f64 = processing
        .iter()
        .map(|p| p.energy_consumption_kwh.unwrap_or(0.0))
        .sum();
    let total_water_m3: f64 = processing
        .iter()
        .map(|p| p.water_usage_m3.unwrap_or(0.0))
        .sum();
    let total_waste_tons: f64 = processing
        .iter()
        .map(|p| p.waste_generation_tons.unwrap_or(0.0))
        .sum();

    let material_kg: f64 = materials
        .iter()
        .map(|m| m.quantity_tons.unwrap_or(0.0) * intensity * grid)
        .sum();
    let processing_kg = total_energy_kwh * grid;
    let transport_tons: f64 = transports
        .iter()
        .map(|t| {
            t.distance_km.unwrap_or(0.0)
                * t.load_capacity_tons.unwrap_or(0.0)
                * factors.transport.factor_for(t.transport_mode())
                / KG_PER_TON
        })
        .sum();

    let co2_emissions_tons = (material_kg + processing_kg) / KG_PER_TON + transport_tons;

    ImpactTotals {
        co2_emissions_tons: round_to(co2_emissions_tons, 6),
        total_energy_kwh: round_to(total_energy_kwh, 2),
        total_water_m3: round_to(total_water_m3, 2),
        total_waste_tons: round_to(total_waste_tons, 6),
        co2_breakdown: Co2Breakdown {
            material_extraction_tons: round_to(material_kg / KG_PER_TON, 6),
            processing_tons: round_to(processing_kg / KG_PER_TON, 6),
            transportation_tons: round_to(transport_tons, 6),
        },
    }
}

/// Computes and stores the impact summary of an assessment.
pub struct Aggregator<'a> {
    service: &'a LcaService,
    factors: &'a FactorTables,
}

impl<'a> Aggregator<'a> {
    #[must_use]
    pub const fn new(service: &'a LcaService, factors: &'a FactorTables) -> Self {
        Self { service, factors }
    }

    /// Aggregate, upsert the summary, and complete the assessment.
    ///
    /// Re-running on unchanged records yields the same figures and reports
    /// `replaced`.
    ///
    /// # Errors
    ///
    /// - `InvalidIdentifier` for a non-positive id.
    /// - `AssessmentNotFound` when no assessment has that id.
    /// - `InsufficientData` without at least one material and one processing record.
    /// - `InternalFailure` on any persistence fault.
    pub async fn compute_impacts(&self, assessment_id: i64) -> Result<ImpactComputation, EngineError> {
        let assessment_id = validate_assessment_id(assessment_id)?;

        let assessment = self
            .service
            .get_assessment(assessment_id)
            .await
            .map_err(|e| EngineError::from_lookup(assessment_id, e))?;

        let (materials, processing, transports) = tokio::try_join!(
            self.service.list_materials_for_assessment(assessment_id),
            self.service.list_processing_for_assessment(assessment_id),
            self.service.list_transports_for_assessment(assessment_id),
        )?;

        if materials.is_empty() {
            return Err(EngineError::InsufficientData {
                reason: format!("assessment {assessment_id} has no material records"),
            });
        }
        if processing.is_empty() {
            return Err(EngineError::InsufficientData {
                reason: format!("assessment {assessment_id} has no processing records"),
            });
        }

        let totals = aggregate(
            assessment.metal(),
            &materials,
            &processing,
            &transports,
            self.factors,
        );

        let figures = SummaryFigures {
            co2_emissions_tons: totals.co2_emissions_tons,
            total_energy_kwh: totals.total_energy_kwh,
            total_water_m3: totals.total_water_m3,
            total_waste_tons: totals.total_waste_tons,
            calculated_at: Utc::now(),
        };
        let (summary, outcome) = self.service.upsert_summary(assessment_id, &figures).await?;

        if self.service.advance_to_completed(assessment_id).await? {
            tracing::debug!(assessment_id, "assessment completed");
        }

        tracing::info!(
            assessment_id,
            co2_emissions_tons = totals.co2_emissions_tons,
            %outcome,
            "impacts computed"
        );

        Ok(ImpactComputation {
            assessment_id,
            co2_emissions_tons: summary.co2_emissions_tons,
            total_energy_kwh: summary.total_energy_kwh,
            total_water_m3: summary.total_water_m3,
            total_waste_tons: summary.total_waste_tons,
            co2_breakdown: totals.co2_breakdown,
            calculated_at: figures.calculated_at,
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material(quantity: Option<f64>) -> MaterialRecord {
        MaterialRecord {
            id: 1,
            assessment_id: 1,
            ore_grade_pct: None,
            extraction_method: None,
            quantity_tons: quantity,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn processing(energy: Option<f64>, water: Option<f64>, waste: Option<f64>) -> ProcessingRecord {
        ProcessingRecord {
            id: 1,
            assessment_id: 1,
            energy_consumption_kwh: energy,
            water_usage_m3: water,
            waste_generation_tons: waste,
            equipment_efficiency_pct: None,
            ai_estimated: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn transport(mode: &str, distance: Option<f64>, load: Option<f64>) -> TransportRecord {
        TransportRecord {
            id: 1,
            assessment_id: 1,
            distance_km: distance,
            mode: mode.into(),
            load_capacity_tons: load,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn sums_treat_null_as_zero() {
        let totals = aggregate(
            Some(MetalType::Steel),
            &[material(None)],
            &[
                processing(Some(1000.0), None, Some(0.1)),
                processing(None, Some(4.5), Some(0.2)),
            ],
            &[],
            &FactorTables::default(),
        );
        assert!((totals.total_energy_kwh - 1000.0).abs() < 1e-9);
        assert!((totals.total_water_m3 - 4.5).abs() < 1e-9);
        assert!((totals.total_waste_tons - 0.3).abs() < 1e-9);
        assert!((totals.co2_emissions_tons - 0.5).abs() < 1e-9);
    }

    #[test]
    fn material_co2_uses_metal_intensity() {
        // 10 t aluminium × 15 kWh/kg × 0.5 = 75 kg
        let totals = aggregate(
            Some(MetalType::Aluminium),
            &[material(Some(10.0))],
            &[processing(None, None, None)],
            &[],
            &FactorTables::default(),
        );
        assert!((totals.co2_breakdown.material_extraction_tons - 0.075).abs() < 1e-9);
        assert!((totals.co2_emissions_tons - 0.075).abs() < 1e-9);
    }

    #[test]
    fn unknown_metal_falls_back_silently() {
        let totals = aggregate(
            None,
            &[material(Some(10.0))],
            &[processing(None, None, None)],
            &[],
            &FactorTables::default(),
        );
        assert!((totals.co2_breakdown.material_extraction_tons - 0.01).abs() < 1e-9);
    }

    #[test]
    fn truck_leg_adds_tons_directly() {
        let totals = aggregate(
            Some(MetalType::Steel),
            &[material(None)],
            &[processing(Some(2000.0), None, None)],
            &[transport("truck", Some(100.0), Some(20.0))],
            &FactorTables::default(),
        );
        assert!((totals.co2_breakdown.transportation_tons - 0.178).abs() < 1e-9);
        assert!((totals.co2_emissions_tons - 1.178).abs() < 1e-9);
    }

    #[test]
    fn unknown_mode_uses_truck_factor() {
        let totals = aggregate(
            Some(MetalType::Steel),
            &[material(None)],
            &[processing(None, None, None)],
            &[
                transport("barge", Some(100.0), Some(20.0)),
                transport("rail", Some(1000.0), None),
            ],
            &FactorTables::default(),
        );
        assert!((totals.co2_breakdown.transportation_tons - 0.178).abs() < 1e-9);
    }

    #[test]
    fn mode_text_must_match_exactly() {
        // "Ship" is not "ship": truck factor
        let totals = aggregate(
            Some(MetalType::Steel),
            &[material(None)],
            &[processing(None, None, None)],
            &[transport("Ship", Some(100.0), Some(20.0))],
            &FactorTables::default(),
        );
        assert!((totals.co2_breakdown.transportation_tons - 0.178).abs() < 1e-9);
    }

    #[test]
    fn grid_factor_override_applies() {
        let mut factors = FactorTables::default();
        factors.grid_emission_factor = 0.25;
        let totals = aggregate(
            Some(MetalType::Copper),
            &[material(Some(1.0))],
            &[processing(Some(4000.0), None, None)],
            &[],
            &factors,
        );
        // (1 × 4 × 0.25 + 4000 × 0.25) / 1000
        assert!((totals.co2_emissions_tons - 1.001).abs() < 1e-9);
    }
}
