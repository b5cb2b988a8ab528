pub mod assessment;
pub mod limit;
