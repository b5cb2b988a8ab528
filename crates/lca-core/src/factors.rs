//! Benchmark ranges and emission factors.
//!
//! [`FactorTables`] is read-only data handed to the estimator and the
//! aggregator at construction. `Default` carries the built-in values; the whole
//! structure deserializes from configuration so alternate tables can be swapped
//! in (tests, regional grids).
//!
//! Units: benchmark ranges are per ton of product, transport factors are
//! kg CO₂ per ton-kilometre, energy intensities are kWh per kg of material and
//! the grid factor is kg CO₂ per kWh.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{MetalType, TransportMode};
use crate::errors::CoreError;

/// Inclusive `[min, max]` envelope of a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BenchmarkRange {
    pub min: f64,
    pub max: f64,
}

impl BenchmarkRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Linear position inside the range: `0.0` is `min`, `1.0` is `max`.
    #[must_use]
    pub fn percentile(&self, fraction: f64) -> f64 {
        (self.max - self.min).mul_add(fraction, self.min)
    }

    fn validate(&self, field: &str) -> Result<(), CoreError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min < 0.0 {
            return Err(CoreError::Validation(format!(
                "{field}: range bounds must be finite and non-negative"
            )));
        }
        if self.min > self.max {
            return Err(CoreError::Validation(format!(
                "{field}: min {} exceeds max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Benchmark envelopes for one metal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MetalBenchmark {
    /// kWh per ton.
    pub energy_consumption: BenchmarkRange,
    /// m³ per ton.
    pub water_usage: BenchmarkRange,
    /// Tons of waste per ton.
    pub waste_generation: BenchmarkRange,
}

impl MetalBenchmark {
    fn validate(&self, metal: &str) -> Result<(), CoreError> {
        self.energy_consumption
            .validate(&format!("benchmarks.{metal}.energy_consumption"))?;
        self.water_usage
            .validate(&format!("benchmarks.{metal}.water_usage"))?;
        self.waste_generation
            .validate(&format!("benchmarks.{metal}.waste_generation"))
    }
}

/// Benchmarks for exactly the supported metals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BenchmarkTable {
    pub aluminium: MetalBenchmark,
    pub copper: MetalBenchmark,
    pub steel: MetalBenchmark,
}

impl BenchmarkTable {
    #[must_use]
    pub const fn get(&self, metal: MetalType) -> &MetalBenchmark {
        match metal {
            MetalType::Aluminium => &self.aluminium,
            MetalType::Copper => &self.copper,
            MetalType::Steel => &self.steel,
        }
    }
}

impl Default for BenchmarkTable {
    fn default() -> Self {
        Self {
            aluminium: MetalBenchmark {
                energy_consumption: BenchmarkRange::new(15_000.0, 18_000.0),
                water_usage: BenchmarkRange::new(25.0, 40.0),
                waste_generation: BenchmarkRange::new(1.5, 3.0),
            },
            copper: MetalBenchmark {
                energy_consumption: BenchmarkRange::new(3_000.0, 4_500.0),
                water_usage: BenchmarkRange::new(80.0, 130.0),
                waste_generation: BenchmarkRange::new(2.0, 3.5),
            },
            steel: MetalBenchmark {
                energy_consumption: BenchmarkRange::new(1_800.0, 2_200.0),
                water_usage: BenchmarkRange::new(3.0, 6.0),
                waste_generation: BenchmarkRange::new(0.2, 0.4),
            },
        }
    }
}

/// kg CO₂ per ton-kilometre by freight mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TransportFactors {
    pub truck: f64,
    pub rail: f64,
    pub ship: f64,
}

impl TransportFactors {
    #[must_use]
    pub const fn get(&self, mode: TransportMode) -> f64 {
        match mode {
            TransportMode::Truck => self.truck,
            TransportMode::Rail => self.rail,
            TransportMode::Ship => self.ship,
        }
    }

    /// Unknown modes (`None`) use the truck factor.
    #[must_use]
    pub const fn factor_for(&self, mode: Option<TransportMode>) -> f64 {
        match mode {
            Some(mode) => self.get(mode),
            None => self.truck,
        }
    }
}

impl Default for TransportFactors {
    fn default() -> Self {
        Self {
            truck: 0.089,
            rail: 0.022,
            ship: 0.008,
        }
    }
}

/// kWh per kg of material by metal, with a fallback for unsupported metals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct EnergyIntensity {
    pub aluminium: f64,
    pub copper: f64,
    pub steel: f64,
    pub fallback: f64,
}

impl EnergyIntensity {
    #[must_use]
    pub const fn get(&self, metal: MetalType) -> f64 {
        match metal {
            MetalType::Aluminium => self.aluminium,
            MetalType::Copper => self.copper,
            MetalType::Steel => self.steel,
        }
    }

    /// Unsupported metals (`None`) silently get `fallback`.
    #[must_use]
    pub const fn for_metal(&self, metal: Option<MetalType>) -> f64 {
        match metal {
            Some(metal) => self.get(metal),
            None => self.fallback,
        }
    }
}

impl Default for EnergyIntensity {
    fn default() -> Self {
        Self {
            aluminium: 15.0,
            copper: 4.0,
            steel: 2.0,
            fallback: 2.0,
        }
    }
}

/// All static tables used by the estimator and the aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FactorTables {
    pub benchmarks: BenchmarkTable,
    pub transport: TransportFactors,
    pub energy_intensity: EnergyIntensity,
    /// kg CO₂ per kWh of grid electricity.
    pub grid_emission_factor: f64,
}

impl Default for FactorTables {
    fn default() -> Self {
        Self {
            benchmarks: BenchmarkTable::default(),
            transport: TransportFactors::default(),
            energy_intensity: EnergyIntensity::default(),
            grid_emission_factor: 0.5,
        }
    }
}

impl FactorTables {
    /// Check every range and factor.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the first offending entry.
    pub fn validate(&self) -> Result<(), CoreError> {
        for metal in MetalType::ALL {
            self.benchmarks.get(metal).validate(metal.as_str())?;
        }

        let factors = [
            ("transport.truck", self.transport.truck),
            ("transport.rail", self.transport.rail),
            ("transport.ship", self.transport.ship),
            ("energy_intensity.aluminium", self.energy_intensity.aluminium),
            ("energy_intensity.copper", self.energy_intensity.copper),
            ("energy_intensity.steel", self.energy_intensity.steel),
            ("energy_intensity.fallback", self.energy_intensity.fallback),
            ("grid_emission_factor", self.grid_emission_factor),
        ];
        for (name, value) in factors {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::Validation(format!(
                    "{name}: factor must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}
