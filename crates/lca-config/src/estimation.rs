//! Estimation run settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EstimationConfig {
    /// Fixed seed for the equipment-efficiency jitter. `None` seeds from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}
