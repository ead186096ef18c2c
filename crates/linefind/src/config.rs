use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::algorithms::DEFAULT_DELTA;

/// Stage switches and parameters for a [`crate::Pipeline`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PipelineConfig {
    /// Neighbourhood radius, in pixels, for endpoint adjacency
    pub delta: u32,
    /// Group traced segments into connected structures
    pub group: bool,
    /// Merge collinear segments inside each structure (requires `group`)
    pub merge: bool,
    /// Maximum angle, in degrees, between two segments that may be merged
    pub angle_epsilon: Option<f64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            delta: DEFAULT_DELTA,
            group: true,
            merge: false,
            angle_epsilon: None,
        }
    }
}

impl PipelineConfig {
    /// Trace, group and merge with the given angle tolerance
    pub fn merging(angle_epsilon: f64) -> Self {
        Self {
            merge: true,
            angle_epsilon: Some(angle_epsilon),
            ..Self::default()
        }
    }
}
