//! Service configuration.

use serde::{Deserialize, Serialize};

use crate::domain::DEFAULT_RECOGNITION_TYPE;

/// Tunables for [`crate::app::RotationService`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    /// Type used when an assignment request names none.
    pub default_mvp_type: String,

    /// Default number of entries returned by `history`.
    pub history_limit: usize,

    /// Number of players listed in `stats().top_mvps`.
    pub top_mvps_limit: usize,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            default_mvp_type: DEFAULT_RECOGNITION_TYPE.to_string(),
            history_limit: 50,
            top_mvps_limit: 10,
        }
    }
}
