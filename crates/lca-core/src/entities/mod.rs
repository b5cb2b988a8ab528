//! Entity structs for assessments and their activity records.
//!
//! Each entity maps to a table in the libSQL database (see `lca-db` migrations).
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip
//! and schema validation.

mod assessment;
mod material;
mod processing;
mod summary;
mod transport;

pub use assessment::Assessment;
pub use material::MaterialRecord;
pub use processing::ProcessingRecord;
pub use summary::ImpactSummary;
pub use transport::TransportRecord;
