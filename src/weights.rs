// Hair Stylist Scoring Weights
// Per-attribute weights with defaults and overrides

use serde::{Deserialize, Serialize};

use crate::types::{Result, StylistError};

/// Weight names accepted by [`ScoringWeights::merge`]
pub const WEIGHT_NAMES: [&str; 8] = [
    "face_shape",
    "hair_length",
    "hair_texture",
    "gender",
    "occasion",
    "maintenance",
    "keyword",
    "avoid",
];

/// Additive weights used by the scorer
///
/// `keyword` and `avoid` apply once per overlapping tag; `avoid` is
/// negative so conflicts subtract from the score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringWeights {
    pub face_shape: f64,
    pub hair_length: f64,
    pub hair_texture: f64,
    pub gender: f64,
    pub occasion: f64,
    pub maintenance: f64,
    pub keyword: f64,
    pub avoid: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            face_shape: 3.0,
            hair_length: 2.5,
            hair_texture: 3.0,
            gender: 1.0,
            occasion: 1.5,
            maintenance: 1.5,
            keyword: 0.8,
            avoid: -4.0,
        }
    }
}

impl ScoringWeights {
    /// Look up a weight by name
    pub fn get(&self, name: &str) -> Option<f64> {
        let value = match name {
            "face_shape" => self.face_shape,
            "hair_length" => self.hair_length,
            "hair_texture" => self.hair_texture,
            "gender" => self.gender,
            "occasion" => self.occasion,
            "maintenance" => self.maintenance,
            "keyword" => self.keyword,
            "avoid" => self.avoid,
            _ => return None,
        };
        Some(value)
    }

    fn slot(&mut self, name: &str) -> Option<&mut f64> {
        let slot = match name {
            "face_shape" => &mut self.face_shape,
            "hair_length" => &mut self.hair_length,
            "hair_texture" => &mut self.hair_texture,
            "gender" => &mut self.gender,
            "occasion" => &mut self.occasion,
            "maintenance" => &mut self.maintenance,
            "keyword" => &mut self.keyword,
            "avoid" => &mut self.avoid,
            _ => return None,
        };
        Some(slot)
    }

    /// Return a copy with the named overrides replacing current values
    ///
    /// Weights not mentioned keep their value. Unknown names are rejected.
    ///
    /// # Example
    /// ```
    /// # use ai_hair_stylist::ScoringWeights;
    /// let weights = ScoringWeights::default().merge([("gender", 0.0)])?;
    /// assert_eq!(weights.gender, 0.0);
    /// assert_eq!(weights.face_shape, 3.0);
    /// # Ok::<(), ai_hair_stylist::StylistError>(())
    /// ```
    pub fn merge<I, K>(mut self, overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        for (name, value) in overrides {
            let name = name.as_ref();
            let slot = self.slot(name).ok_or_else(|| StylistError::UnknownWeight {
                name: name.to_string(),
            })?;
            *slot = value;
        }
        Ok(self)
    }

    /// Defaults merged with overrides
    pub fn with_overrides<I, K>(overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        Self::default().merge(overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_weights() {
        let weights = ScoringWeights::default();
        assert_eq!(weights.face_shape, 3.0);
        assert_eq!(weights.hair_length, 2.5);
        assert_eq!(weights.hair_texture, 3.0);
        assert_eq!(weights.gender, 1.0);
        assert_eq!(weights.occasion, 1.5);
        assert_eq!(weights.maintenance, 1.5);
        assert_eq!(weights.keyword, 0.8);
        assert_eq!(weights.avoid, -4.0);
    }

    #[test]
    fn test_merge_keeps_unspecified() {
        let overrides: HashMap<String, f64> =
            [("keyword".to_string(), 2.0), ("avoid".to_string(), -1.0)].into();
        let weights = ScoringWeights::with_overrides(overrides).unwrap();

        assert_eq!(weights.keyword, 2.0);
        assert_eq!(weights.avoid, -1.0);
        assert_eq!(weights.hair_texture, 3.0);
    }

    #[test]
    fn test_merge_unknown_weight() {
        let err = ScoringWeights::with_overrides([("colour", 1.0)]).unwrap_err();
        assert!(matches!(err, StylistError::UnknownWeight { name } if name == "colour"));
    }

    #[test]
    fn test_get_by_name() {
        let weights = ScoringWeights::default();
        for name in WEIGHT_NAMES {
            assert!(weights.get(name).is_some(), "missing weight {}", name);
        }
        assert_eq!(weights.get("nope"), None);
    }
}
