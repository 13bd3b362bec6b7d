// Hair Stylist Configuration
// TOML settings for weights, minimum score and default limit

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{Result, StylistError};
use crate::weights::ScoringWeights;

/// Default number of recommendations returned by `recommend`
pub const DEFAULT_LIMIT: i64 = 3;

/// Engine settings loaded from TOML
///
/// Every key is optional; missing keys keep their defaults.
///
/// ```toml
/// minimum_score = 1.0
/// limit = 5
///
/// [weights]
/// keyword = 1.2
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StylistConfig {
    /// Recommendations scoring below this are dropped
    pub minimum_score: f64,

    /// Result limit; zero or negative means unbounded
    pub limit: i64,

    /// Weight overrides merged onto the defaults
    pub weights: ScoringWeights,
}

impl Default for StylistConfig {
    fn default() -> Self {
        Self {
            minimum_score: 0.0,
            limit: DEFAULT_LIMIT,
            weights: ScoringWeights::default(),
        }
    }
}

impl StylistConfig {
    /// Parse settings from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| StylistError::Config(e.to_string()))
    }

    /// Load settings from a TOML file
    ///
    /// # Example
    /// ```ignore
    /// let config = StylistConfig::load(Path::new("stylist.toml"))?;
    /// ```
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| StylistError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded stylist config");
        Ok(config)
    }
}
