//! Missing-measurement estimation.
//!
//! For each processing record of an assessment, every null measurement is
//! replaced with a benchmark-derived value and the record is flagged
//! `ai_estimated`. Records that are already complete are left untouched.
//!
//! Baselines sit at the 60th percentile of the metal's benchmark range and are
//! scaled by the correction factors of the assessment's first material record.
//! Equipment efficiency gets a uniform jitter drawn from the injected RNG.

use std::collections::BTreeSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use lca_core::entities::{MaterialRecord, ProcessingRecord};
use lca_core::enums::{ExtractionMethod, MeasurementField};
use lca_core::factors::{FactorTables, MetalBenchmark};
use lca_core::ids::validate_assessment_id;
use lca_core::responses::{EstimationReport, RecordFailure};
use lca_db::service::LcaService;
use lca_db::updates::processing::{ProcessingUpdate, ProcessingUpdateBuilder};

use crate::correction::CorrectionFactors;
use crate::error::EngineError;
use crate::rounding::round_to;

const BENCHMARK_PERCENTILE: f64 = 0.6;
const EFFICIENCY_JITTER_PCT: f64 = 5.0;

const CONFIDENCE_CEILING: f64 = 0.90;
const CONFIDENCE_FLOOR: f64 = 0.70;

/// Build the jitter source: seeded when reproducibility is wanted, from OS
/// entropy otherwise.
#[must_use]
pub fn jitter_rng(seed: Option<u64>) -> ChaCha8Rng {
    seed.map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64)
}

/// Per-run estimation inputs, fixed once the assessment has been read.
#[derive(Debug, Clone, Copy)]
struct Baselines {
    energy_kwh: f64,
    water_m3: f64,
    waste_tons: f64,
    efficiency_pct: f64,
}

impl Baselines {
    fn new(benchmark: &MetalBenchmark, representative: Option<&MaterialRecord>) -> Self {
        let correction = CorrectionFactors::from_material(representative).combined();
        let quantity = representative
            .and_then(|material| material.quantity_tons)
            .unwrap_or(1.0);

        Self {
            energy_kwh: round_to(
                benchmark.energy_consumption.percentile(BENCHMARK_PERCENTILE) * correction,
                2,
            ),
            water_m3: round_to(
                benchmark.water_usage.percentile(BENCHMARK_PERCENTILE) * correction,
                2,
            ),
            waste_tons: round_to(
                benchmark.waste_generation.percentile(BENCHMARK_PERCENTILE) * correction * quantity,
                2,
            ),
            efficiency_pct: efficiency_baseline(
                representative.and_then(MaterialRecord::extraction),
            ),
        }
    }
}

const fn efficiency_baseline(method: Option<ExtractionMethod>) -> f64 {
    match method {
        Some(ExtractionMethod::Recycled) => 85.0,
        Some(ExtractionMethod::Underground) => 70.0,
        Some(ExtractionMethod::OpenPit) | None => 75.0,
    }
}

/// Fills null processing measurements for one assessment per call.
pub struct Estimator<'a, R> {
    service: &'a LcaService,
    factors: &'a FactorTables,
    rng: R,
}

impl<'a, R: Rng> Estimator<'a, R> {
    pub const fn new(service: &'a LcaService, factors: &'a FactorTables, rng: R) -> Self {
        Self {
            service,
            factors,
            rng,
        }
    }

    /// Estimate every missing measurement of the assessment's processing records.
    ///
    /// A record write that fails does not abort the run: it is listed in the
    /// report's `failures` and excluded from `estimated_count` and
    /// `estimated_fields`.
    ///
    /// # Errors
    ///
    /// - `InvalidIdentifier` for a non-positive id.
    /// - `AssessmentNotFound` when no assessment has that id.
    /// - `UnsupportedMetalType` when the metal has no benchmark; nothing is written.
    /// - `InternalFailure` when the records cannot be read.
    pub async fn estimate_missing(
        &mut self,
        assessment_id: i64,
    ) -> Result<EstimationReport, EngineError> {
        let assessment_id = validate_assessment_id(assessment_id)?;

        let assessment = self
            .service
            .get_assessment(assessment_id)
            .await
            .map_err(|e| EngineError::from_lookup(assessment_id, e))?;

        let (materials, processing) = tokio::try_join!(
            self.service.list_materials_for_assessment(assessment_id),
            self.service.list_processing_for_assessment(assessment_id),
        )?;

        let benchmark = assessment
            .metal()
            .map(|metal| self.factors.benchmarks.get(metal))
            .ok_or_else(|| EngineError::UnsupportedMetalType {
                metal: assessment.metal_type.clone(),
            })?;

        let baselines = Baselines::new(benchmark, materials.first());
        tracing::debug!(
            assessment_id,
            metal = %assessment.metal_type,
            ?baselines,
            "estimation baselines"
        );

        let mut estimated_count = 0u32;
        let mut estimated_fields = BTreeSet::new();
        let mut failures = Vec::new();

        for record in &processing {
            let missing = record.missing_fields();
            if missing.is_empty() {
                continue;
            }

            let update = self.fill(&baselines, &missing);
            match self.service.update_processing(record.id, &update).await {
                Ok(_) => {
                    tracing::debug!(record_id = record.id, fields = missing.len(), "record estimated");
                    estimated_count += 1;
                    estimated_fields.extend(missing);
                }
                Err(error) => {
                    let error = EngineError::from(error);
                    tracing::warn!(record_id = record.id, %error, "estimated values not written");
                    failures.push(RecordFailure {
                        record_id: record.id,
                        code: error.code().to_string(),
                        message: error.to_string(),
                    });
                }
            }
        }

        let confidence_score = confidence_score(&materials, &processing, failures.len());

        tracing::info!(
            assessment_id,
            estimated_count,
            failed = failures.len(),
            confidence_score,
            "estimation finished"
        );

        Ok(EstimationReport {
            assessment_id,
            estimated_count,
            estimated_fields,
            confidence_score,
            failures,
        })
    }

    fn fill(&mut self, baselines: &Baselines, missing: &[MeasurementField]) -> ProcessingUpdate {
        let mut builder = ProcessingUpdateBuilder::new().ai_estimated(true);
        for field in missing {
            let value = match field {
                MeasurementField::EnergyConsumptionKwh => baselines.energy_kwh,
                MeasurementField::WaterUsageM3 => baselines.water_m3,
                MeasurementField::WasteGenerationTons => baselines.waste_tons,
                MeasurementField::EquipmentEfficiencyPct => {
                    let jitter = self
                        .rng
                        .gen_range(-EFFICIENCY_JITTER_PCT..=EFFICIENCY_JITTER_PCT);
                    round_to(baselines.efficiency_pct + jitter, 2)
                }
            };
            builder = builder.measurement(*field, value);
        }
        builder.build()
    }
}

/// Heuristic trust in the estimates, in `[0.70, 0.90]`.
///
/// `unwritten` is the number of records that needed estimates but could not
/// be updated; those still carry nulls.
fn confidence_score(
    materials: &[MaterialRecord],
    processing: &[ProcessingRecord],
    unwritten: usize,
) -> f64 {
    let mut score = CONFIDENCE_CEILING;

    if materials.is_empty() {
        score -= 0.10;
    }
    if materials.iter().any(|m| m.ore_grade_pct.is_none()) {
        score -= 0.05;
    }
    if materials.iter().any(|m| m.extraction_method.is_none()) {
        score -= 0.05;
    }
    if unwritten * 2 > processing.len() {
        score -= 0.10;
    }

    round_to(score.clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING), 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use lca_core::enums::MetalType;
    use rstest::rstest;

    fn material(grade: Option<f64>, method: Option<&str>, quantity: Option<f64>) -> MaterialRecord {
        MaterialRecord {
            id: 1,
            assessment_id: 1,
            ore_grade_pct: grade,
            extraction_method: method.map(String::from),
            quantity_tons: quantity,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn empty_processing(id: i64) -> ProcessingRecord {
        ProcessingRecord {
            id,
            assessment_id: 1,
            energy_consumption_kwh: None,
            water_usage_m3: None,
            waste_generation_tons: None,
            equipment_efficiency_pct: None,
            ai_estimated: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn steel_baselines_without_material() {
        let tables = FactorTables::default();
        let baselines = Baselines::new(tables.benchmarks.get(MetalType::Steel), None);
        assert!((baselines.energy_kwh - 2040.0).abs() < 1e-9);
        assert!((baselines.water_m3 - 4.8).abs() < 1e-9);
        assert!((baselines.waste_tons - 0.32).abs() < 1e-9);
        assert!((baselines.efficiency_pct - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn waste_scales_with_quantity() {
        let tables = FactorTables::default();
        let steel = material(Some(3.0), Some("open_pit"), Some(10.0));
        let baselines = Baselines::new(tables.benchmarks.get(MetalType::Steel), Some(&steel));
        assert!((baselines.waste_tons - 3.2).abs() < 1e-9);
        assert!((baselines.energy_kwh - 2040.0).abs() < 1e-9);
    }

    #[test]
    fn efficiency_baseline_by_method() {
        assert!((efficiency_baseline(Some(ExtractionMethod::Recycled)) - 85.0).abs() < f64::EPSILON);
        assert!((efficiency_baseline(Some(ExtractionMethod::Underground)) - 70.0).abs() < f64::EPSILON);
        assert!((efficiency_baseline(None) - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn confidence_full_marks() {
        let materials = [material(Some(1.0), Some("open_pit"), None)];
        let score = confidence_score(&materials, &[empty_processing(1)], 0);
        assert!((score - 0.90).abs() < f64::EPSILON);
    }

    #[test]
    fn confidence_no_materials() {
        let score = confidence_score(&[], &[empty_processing(1)], 0);
        assert!((score - 0.80).abs() < f64::EPSILON);
    }

    #[test]
    fn confidence_hits_floor() {
        let materials = [material(None, None, None)];
        let processing = [empty_processing(1), empty_processing(2), empty_processing(3)];
        let score = confidence_score(&materials, &processing, 2);
        assert!((score - 0.70).abs() < f64::EPSILON);
    }

    #[test]
    fn confidence_exactly_half_unwritten_is_not_penalised() {
        let materials = [material(Some(1.0), Some("recycled"), None)];
        let processing = [empty_processing(1), empty_processing(2)];
        let score = confidence_score(&materials, &processing, 1);
        assert!((score - 0.90).abs() < f64::EPSILON);
    }

    /// Material sets covering every combination the score looks at.
    fn material_set(kind: usize) -> Vec<MaterialRecord> {
        match kind {
            0 => Vec::new(),
            1 => vec![material(Some(3.0), Some("open_pit"), Some(1.0))],
            2 => vec![material(None, Some("recycled"), None)],
            3 => vec![material(Some(0.5), None, None)],
            4 => vec![material(None, None, None)],
            _ => vec![
                material(None, Some("underground"), None),
                material(Some(6.0), None, Some(2.0)),
            ],
        }
    }

    #[rstest]
    fn confidence_bounded_for_every_combination(
        #[values(0, 1, 2, 3, 4, 5)] kind: usize,
        #[values(1, 2, 3, 4)] records: usize,
        #[values(0, 1, 2, 3, 4)] unwritten: usize,
    ) {
        if unwritten > records {
            return;
        }
        let materials = material_set(kind);
        let processing: Vec<_> = (1..=i64::try_from(records).unwrap()).map(empty_processing).collect();

        let score = confidence_score(&materials, &processing, unwritten);

        let mut expected = 0.90;
        if materials.is_empty() {
            expected -= 0.10;
        }
        if materials.iter().any(|m| m.ore_grade_pct.is_none()) {
            expected -= 0.05;
        }
        if materials.iter().any(|m| m.extraction_method.is_none()) {
            expected -= 0.05;
        }
        if unwritten * 2 > records {
            expected -= 0.10;
        }
        let expected = f64::max(expected, 0.70);

        assert!((0.70..=0.90).contains(&score), "score {score} out of bounds");
        assert!((score - expected).abs() < 1e-9, "expected {expected}, got {score}");
        assert!(
            ((score * 100.0).round() - score * 100.0).abs() < 1e-9,
            "{score} has more than two decimals"
        );
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut a = jitter_rng(Some(7));
        let mut b = jitter_rng(Some(7));
        let x: f64 = a.gen_range(-5.0..=5.0);
        let y: f64 = b.gen_range(-5.0..=5.0);
        assert!((x - y).abs() < f64::EPSILON);
    }
}
