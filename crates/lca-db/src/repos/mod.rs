//! Repository modules implementing CRUD operations for all LCA entities.
//!
//! Each module adds methods to `LcaService` via `impl LcaService` blocks.

pub mod assessment;
pub mod material;
pub mod processing;
pub mod summary;
pub mod transport;
