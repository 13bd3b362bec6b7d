// Hair Stylist Scorer
// Weighted attribute matching between a hairstyle and client preferences

use std::collections::BTreeSet;

use crate::catalog::Hairstyle;
use crate::preferences::ClientPreferences;
use crate::types::{MaintenanceLevel, MatchReason, Recommendation};
use crate::weights::ScoringWeights;

/// Scores hairstyles against preferences
///
/// Only fields present in the preferences contribute. Rules run in a fixed
/// order (face shape, length, texture, gender, occasion, maintenance,
/// keywords, avoid) and reasons are recorded in that order.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleScorer {
    weights: ScoringWeights,
}

impl StyleScorer {
    /// Create a scorer with the given weights
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a single hairstyle
    ///
    /// # Returns
    /// Recommendation with the total score (may be negative) and reasons
    pub fn score<'a>(
        &self,
        hairstyle: &'a Hairstyle,
        preferences: &ClientPreferences,
    ) -> Recommendation<'a> {
        let w = &self.weights;
        let mut rec = Recommendation::new(hairstyle);

        // Single-valued attributes
        if let Some(v) = member(preferences.face_shape(), hairstyle.face_shapes()) {
            rec.add(w.face_shape, MatchReason::FaceShape(v.to_string()));
        }
        if let Some(v) = member(preferences.hair_length(), hairstyle.hair_lengths()) {
            rec.add(w.hair_length, MatchReason::HairLength(v.to_string()));
        }
        if let Some(v) = member(preferences.hair_texture(), hairstyle.hair_textures()) {
            rec.add(w.hair_texture, MatchReason::HairTexture(v.to_string()));
        }
        if let Some(v) = member(preferences.gender(), hairstyle.genders()) {
            rec.add(w.gender, MatchReason::Gender(v.to_string()));
        }
        if let Some(v) = member(preferences.occasion(), hairstyle.occasions()) {
            rec.add(w.occasion, MatchReason::Occasion(v.to_string()));
        }

        // Maintenance: distance on the low/medium/high scale
        if let Some(desired_label) = preferences.maintenance() {
            let desired = MaintenanceLevel::from_label(desired_label);
            let actual = hairstyle.maintenance_level();
            if let (Some(desired), Some(actual)) = (desired, actual) {
                match desired.distance(actual) {
                    0 => rec.add(
                        w.maintenance,
                        MatchReason::MaintenanceExact(desired_label.to_string()),
                    ),
                    1 => rec.add(w.maintenance * 0.5, MatchReason::MaintenanceNear),
                    _ => {}
                }
            }
        }

        // Keywords: one weight per overlapping tag
        let overlap: Vec<&String> = preferences.keywords().intersection(hairstyle.tags()).collect();
        if !overlap.is_empty() {
            rec.add(
                w.keyword * overlap.len() as f64,
                MatchReason::keywords(overlap),
            );
        }

        // Avoid: penalty per conflicting tag, also marks a hard conflict
        let conflict: Vec<&String> = preferences.avoid().intersection(hairstyle.tags()).collect();
        if !conflict.is_empty() {
            rec.add(
                w.avoid * conflict.len() as f64,
                MatchReason::conflict(conflict),
            );
        }

        tracing::trace!(
            style = hairstyle.name(),
            score = rec.score,
            reasons = rec.reasons.len(),
            "scored hairstyle"
        );

        rec
    }
}

fn member<'p>(wanted: Option<&'p str>, offered: &BTreeSet<String>) -> Option<&'p str> {
    wanted.filter(|v| offered.contains(*v))
}
