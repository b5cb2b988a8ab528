//! # lca-core
//!
//! Core types shared across the metal LCA workspace.
//!
//! This crate provides the foundational types used by every other crate:
//! - Entity structs for assessments and their activity records
//! - Status and classification enums (metal type, extraction method, transport mode)
//! - The read-only benchmark and emission factor tables
//! - Assessment identifier parsing
//! - Cross-cutting error types
//! - Response types returned by the estimation and aggregation operations

pub mod entities;
pub mod enums;
pub mod errors;
pub mod factors;
pub mod ids;
pub mod responses;
