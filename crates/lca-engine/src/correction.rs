//! Correction factors derived from the representative material record.
//!
//! Benchmarks describe typical primary production. Low-grade ore costs more
//! energy per ton of metal, rich ore less; recycled feed skips most of the
//! extraction chain.

use lca_core::entities::MaterialRecord;
use lca_core::enums::ExtractionMethod;

/// Multiplicative adjustments applied to benchmark baselines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrectionFactors {
    pub ore_grade: f64,
    pub extraction: f64,
    pub efficiency: f64,
}

impl CorrectionFactors {
    /// No adjustment, used when the assessment has no material.
    pub const NEUTRAL: Self = Self {
        ore_grade: 1.0,
        extraction: 1.0,
        efficiency: 1.0,
    };

    #[must_use]
    pub fn from_material(material: Option<&MaterialRecord>) -> Self {
        let Some(material) = material else {
            return Self::NEUTRAL;
        };
        Self {
            ore_grade: ore_grade_factor(material.ore_grade_pct),
            extraction: extraction_factor(material.extraction()),
            efficiency: 1.0,
        }
    }

    /// Product of the three factors.
    #[must_use]
    pub fn combined(&self) -> f64 {
        self.ore_grade * self.extraction * self.efficiency
    }
}

fn ore_grade_factor(grade_pct: Option<f64>) -> f64 {
    match grade_pct {
        Some(grade) if grade < 1.0 => 1.30,
        Some(grade) if grade < 2.0 => 1.15,
        Some(grade) if grade > 5.0 => 0.85,
        _ => 1.0,
    }
}

fn extraction_factor(method: Option<ExtractionMethod>) -> f64 {
    match method {
        Some(ExtractionMethod::Recycled) => 0.30,
        Some(ExtractionMethod::Underground) => 1.20,
        Some(ExtractionMethod::OpenPit) | None => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rstest::rstest;

    fn material(grade: Option<f64>, method: Option<&str>) -> MaterialRecord {
        MaterialRecord {
            id: 1,
            assessment_id: 1,
            ore_grade_pct: grade,
            extraction_method: method.map(String::from),
            quantity_tons: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[rstest]
    #[case(Some(0.8), 1.30)]
    #[case(Some(0.999), 1.30)]
    #[case(Some(1.0), 1.15)]
    #[case(Some(1.99), 1.15)]
    #[case(Some(2.0), 1.0)]
    #[case(Some(5.0), 1.0)]
    #[case(Some(5.01), 0.85)]
    #[case(None, 1.0)]
    fn ore_grade_steps(#[case] grade: Option<f64>, #[case] expected: f64) {
        let factors = CorrectionFactors::from_material(Some(&material(grade, None)));
        assert!((factors.ore_grade - expected).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case(Some("recycled"), 0.30)]
    #[case(Some("underground"), 1.20)]
    #[case(Some("open_pit"), 1.0)]
    #[case(Some("heap_leach"), 1.0)]
    #[case(Some("Recycled"), 1.0)]
    #[case(None, 1.0)]
    fn extraction_steps(#[case] method: Option<&str>, #[case] expected: f64) {
        let factors = CorrectionFactors::from_material(Some(&material(Some(3.0), method)));
        assert!((factors.extraction - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn absent_material_is_neutral() {
        let factors = CorrectionFactors::from_material(None);
        assert_eq!(factors, CorrectionFactors::NEUTRAL);
        assert!((factors.combined() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn low_grade_recycled_combines() {
        let factors = CorrectionFactors::from_material(Some(&material(Some(0.8), Some("recycled"))));
        assert!((factors.combined() - 0.39).abs() < 1e-12);
    }
}
