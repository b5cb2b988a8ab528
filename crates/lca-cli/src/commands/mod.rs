pub mod assessment;
pub mod dispatch;
pub mod estimate;
pub mod impacts;
pub mod material;
pub mod processing;
pub mod schema;
pub mod shared;
pub mod summary;
pub mod transport;
