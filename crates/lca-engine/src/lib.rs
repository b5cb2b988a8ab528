//! # lca-engine
//!
//! The two operations of the impact engine:
//!
//! - [`Estimator`] fills missing processing measurements from metal
//!   benchmarks, adjusted by the assessment's representative material.
//! - [`Aggregator`] turns an assessment's records into CO₂, energy, water
//!   and waste totals and stores them as the assessment's single summary.
//!
//! Both borrow an [`LcaService`](lca_db::service::LcaService) for the
//! duration of a call and a read-only [`FactorTables`](lca_core::factors::FactorTables).
//! Nothing is cached between calls.

pub mod aggregator;
pub mod correction;
pub mod error;
pub mod estimator;
pub mod rounding;

pub use aggregator::Aggregator;
pub use error::{EngineError, ErrorPayload};
pub use estimator::{Estimator, jitter_rng};
