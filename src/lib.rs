//! # AI Hair Stylist: Explainable Hairstyle Recommendations
//!
//! Ranks a small, static hairstyle catalog against a client's preferences and
//! explains every score.
//!
//! ## Scoring
//!
//! 1. **Attributes** - face shape, length, texture, gender and occasion add
//!    their weight when the style supports the requested value
//! 2. **Maintenance** - full weight for an exact level, half for one step off
//! 3. **Keywords** - a fixed amount per requested tag the style carries
//! 4. **Avoid** - a penalty per avoided tag, and the style is vetoed from
//!    ranked results
//!
//! ## Example Usage
//!
//! ```
//! use ai_hair_stylist::{ClientPreferences, HairstyleCatalog, RecommendationEngine};
//!
//! let catalog = HairstyleCatalog::bundled()?;
//! let preferences = ClientPreferences::new()
//!     .with_hair_texture("curly")
//!     .with_maintenance("low")
//!     .with_keywords(["curls"]);
//!
//! let engine = RecommendationEngine::new(&catalog);
//! for rec in engine.recommend(&preferences, 3) {
//!     println!("{} ({:.2})", rec.hairstyle.name(), rec.score);
//! }
//! # Ok::<(), ai_hair_stylist::StylistError>(())
//! ```
//!
//! ## Architecture
//!
//! - **Normalizer** - Canonical lowercase values and sets
//! - **Client Preferences** - Validated preference record
//! - **Catalog** - Name-keyed, insertion-ordered hairstyle collection
//! - **Style Scorer** - Weighted matching with typed reasons
//! - **Recommendation Engine** - Filtering, veto and deterministic ordering

pub mod catalog;
pub mod config;
pub mod data;
pub mod engine;
pub mod normalize;
pub mod preferences;
pub mod scoring;
pub mod types;
pub mod weights;

// Re-export main types and functions for convenience
pub use catalog::{Hairstyle, HairstyleCatalog, HairstyleRecord, StringList};
pub use config::{StylistConfig, DEFAULT_LIMIT};
pub use data::{DataInfo, DataLoader};
pub use engine::{recommend_from_map, recommend_hairstyles, RecommendationEngine};
pub use normalize::{normalize_set, normalize_value, split_keyword_list};
pub use preferences::ClientPreferences;
pub use scoring::StyleScorer;
pub use types::{
    MaintenanceLevel, MatchReason, Recommendation, RecommendationSummary, Result, StylistError,
};
pub use weights::{ScoringWeights, WEIGHT_NAMES};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
