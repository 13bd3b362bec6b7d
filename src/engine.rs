// Hair Stylist Recommendation Engine
// Main API that scores, filters and ranks the catalog

use std::cmp::Ordering;

use serde_json::{Map, Value};

use crate::catalog::HairstyleCatalog;
use crate::config::StylistConfig;
use crate::preferences::ClientPreferences;
use crate::scoring::StyleScorer;
use crate::types::{Recommendation, RecommendationSummary, Result};
use crate::weights::ScoringWeights;

/// Ranks hairstyles according to client preferences
///
/// Combines:
/// - Scoring (weighted attribute matching)
/// - Filtering (minimum score and avoid-list veto)
/// - Ordering (score descending, then name)
pub struct RecommendationEngine<'a> {
    /// Catalog lent by the caller
    catalog: &'a HairstyleCatalog,

    /// Scorer holding the active weights
    scorer: StyleScorer,

    /// Recommendations scoring below this are dropped
    minimum_score: f64,
}

impl<'a> RecommendationEngine<'a> {
    /// Create an engine with default weights and a minimum score of 0.0
    pub fn new(catalog: &'a HairstyleCatalog) -> Self {
        Self {
            catalog,
            scorer: StyleScorer::default(),
            minimum_score: 0.0,
        }
    }

    /// Create an engine from loaded settings
    pub fn from_config(catalog: &'a HairstyleCatalog, config: &StylistConfig) -> Self {
        Self::new(catalog)
            .with_weights(config.weights)
            .with_minimum_score(config.minimum_score)
    }

    /// Set scoring weights
    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.scorer = StyleScorer::new(weights);
        self
    }

    /// Set the minimum admitted score
    pub fn with_minimum_score(mut self, minimum_score: f64) -> Self {
        self.minimum_score = minimum_score;
        self
    }

    pub fn catalog(&self) -> &'a HairstyleCatalog {
        self.catalog
    }

    pub fn minimum_score(&self) -> f64 {
        self.minimum_score
    }

    /// Score every catalog entry without filtering, in catalog order
    pub fn score_all(&self, preferences: &ClientPreferences) -> Vec<Recommendation<'a>> {
        self.catalog
            .iter()
            .map(|style| self.scorer.score(style, preferences))
            .collect()
    }

    /// Return recommendations sorted by score
    ///
    /// Entries below the minimum score are dropped, and any entry that hits
    /// the avoid list is dropped regardless of its score. Ties are broken
    /// by case-insensitive name.
    pub fn rank(&self, preferences: &ClientPreferences) -> Vec<Recommendation<'a>> {
        // Step 1: Score the catalog
        let scored = self.score_all(preferences);
        let total = scored.len();

        // Step 2: Filter by threshold and veto
        let mut vetoed = 0usize;
        let mut results: Vec<_> = scored
            .into_iter()
            .filter(|rec| {
                if rec.has_conflict() {
                    vetoed += 1;
                    return false;
                }
                rec.score >= self.minimum_score
            })
            .collect();

        // Step 3: Sort by score descending, then name
        results.sort_by(compare_ranked);

        tracing::debug!(
            catalog = total,
            ranked = results.len(),
            vetoed,
            preferences = %preferences.describe(),
            "ranked hairstyles"
        );

        results
    }

    /// Ranked recommendations truncated to `limit`
    ///
    /// # Arguments
    /// * `preferences` - Client preferences
    /// * `limit` - Maximum results; zero or negative returns everything
    pub fn recommend(
        &self,
        preferences: &ClientPreferences,
        limit: i64,
    ) -> Vec<Recommendation<'a>> {
        let mut results = self.rank(preferences);
        if let Ok(limit) = usize::try_from(limit) {
            if limit > 0 {
                results.truncate(limit);
            }
        }
        results
    }
}

/// Ordering used by `rank`: higher score first, then ascending lowercase name
fn compare_ranked(a: &Recommendation<'_>, b: &Recommendation<'_>) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.hairstyle.key().cmp(b.hairstyle.key()))
}

/// Convenience wrapper around [`RecommendationEngine`]
///
/// # Arguments
/// * `catalog` - Catalog to rank
/// * `preferences` - Client preferences
/// * `limit` - Maximum results; zero or negative returns everything
/// * `weights` - Optional weights replacing the defaults
pub fn recommend_hairstyles<'a>(
    catalog: &'a HairstyleCatalog,
    preferences: &ClientPreferences,
    limit: i64,
    weights: Option<ScoringWeights>,
) -> Vec<Recommendation<'a>> {
    let engine = RecommendationEngine::new(catalog).with_weights(weights.unwrap_or_default());
    engine.recommend(preferences, limit)
}

/// Loose-input entry point: preferences as a JSON mapping, catalog optional
///
/// Falls back to the bundled catalog when `catalog` is `None`. Results are
/// returned as owned summaries since the fallback catalog is local.
///
/// # Returns
/// * `Err(InvalidPreferenceField | InvalidPreferenceValue)` - bad mapping
/// * `Err(..)` - the bundled catalog failed to load
pub fn recommend_from_map(
    catalog: Option<&HairstyleCatalog>,
    preferences: &Map<String, Value>,
    limit: i64,
    weights: Option<ScoringWeights>,
) -> Result<Vec<RecommendationSummary>> {
    let preferences = ClientPreferences::from_map(preferences)?;
    let summarize = |catalog: &HairstyleCatalog| -> Vec<RecommendationSummary> {
        recommend_hairstyles(catalog, &preferences, limit, weights)
            .iter()
            .map(Recommendation::summary)
            .collect()
    };

    match catalog {
        Some(catalog) => Ok(summarize(catalog)),
        None => {
            let bundled = HairstyleCatalog::bundled()?;
            Ok(summarize(&bundled))
        }
    }
}
