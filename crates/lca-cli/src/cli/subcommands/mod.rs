mod assessment;
mod material;
mod processing;
mod transport;

pub use assessment::AssessmentCommands;
pub use material::MaterialCommands;
pub use processing::ProcessingCommands;
pub use transport::TransportCommands;
