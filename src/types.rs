// Hair Stylist Type Definitions
// Core types for scoring results, reasons and errors

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::catalog::Hairstyle;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, StylistError>;

/// Ordered maintenance scale shared by hairstyles and preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MaintenanceLevel {
    Low,
    Medium,
    High,
}

impl MaintenanceLevel {
    /// Map a normalized label onto the scale.
    ///
    /// Returns `None` for anything outside `low`/`medium`/`high`; callers treat
    /// that as "no data" rather than an error.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Position on the scale: low=0, medium=1, high=2
    pub fn ordinal(self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }

    /// Absolute number of steps between two levels
    pub fn distance(self, other: Self) -> u8 {
        self.ordinal().abs_diff(other.ordinal())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for MaintenanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single contribution to a recommendation's score
///
/// The `Display` form is the human-readable reason shown to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchReason {
    FaceShape(String),
    HairLength(String),
    HairTexture(String),
    Gender(String),
    Occasion(String),
    /// Maintenance level matches exactly
    MaintenanceExact(String),
    /// Maintenance level is one step away
    MaintenanceNear,
    /// Requested keywords found in the style's tags (sorted)
    Keywords(Vec<String>),
    /// Avoided tags found in the style's tags (sorted)
    Conflict(Vec<String>),
}

impl MatchReason {
    /// Build a keyword reason from an overlap set
    pub fn keywords<'s>(overlap: impl IntoIterator<Item = &'s String>) -> Self {
        Self::Keywords(sorted(overlap))
    }

    /// Build a conflict reason from an overlap set
    pub fn conflict<'s>(overlap: impl IntoIterator<Item = &'s String>) -> Self {
        Self::Conflict(sorted(overlap))
    }

    /// Whether this reason vetoes the recommendation outright
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}

fn sorted<'s>(values: impl IntoIterator<Item = &'s String>) -> Vec<String> {
    values
        .into_iter()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FaceShape(v) => write!(f, "suits {} face shapes", v),
            Self::HairLength(v) => write!(f, "matches {} length goal", v),
            Self::HairTexture(v) => write!(f, "works with {} texture", v),
            Self::Gender(v) => write!(f, "popular with {} clients", v),
            Self::Occasion(v) => write!(f, "appropriate for {} occasions", v),
            Self::MaintenanceExact(v) => write!(f, "meets {} maintenance goal", v),
            Self::MaintenanceNear => {
                write!(f, "slightly different maintenance but still manageable")
            }
            Self::Keywords(tags) => write!(f, "matches requested features: {}", tags.join(", ")),
            Self::Conflict(tags) => write!(f, "conflicts with avoid list: {}", tags.join(", ")),
        }
    }
}

/// A scored hairstyle, borrowed from the catalog it was ranked from
#[derive(Debug, Clone)]
pub struct Recommendation<'a> {
    /// The catalog entry
    pub hairstyle: &'a Hairstyle,

    /// Sum of all weighted contributions (may be negative)
    pub score: f64,

    /// Contributions in evaluation order
    pub reasons: Vec<MatchReason>,
}

impl<'a> Recommendation<'a> {
    /// Create an unscored recommendation
    pub fn new(hairstyle: &'a Hairstyle) -> Self {
        Self {
            hairstyle,
            score: 0.0,
            reasons: Vec::new(),
        }
    }

    /// Record a contribution and its reason
    pub fn add(&mut self, amount: f64, reason: MatchReason) {
        self.score += amount;
        self.reasons.push(reason);
    }

    /// Whether any avoided tag was hit
    pub fn has_conflict(&self) -> bool {
        self.reasons.iter().any(MatchReason::is_conflict)
    }

    /// Reasons rendered as display strings
    pub fn reason_texts(&self) -> Vec<String> {
        self.reasons.iter().map(ToString::to_string).collect()
    }

    /// Owned presentation view
    pub fn summary(&self) -> RecommendationSummary {
        RecommendationSummary {
            name: self.hairstyle.name().to_string(),
            description: self.hairstyle.description().to_string(),
            score: self.score,
            reasons: self.reason_texts(),
        }
    }
}

/// Presentation tuple handed to output layers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationSummary {
    pub name: String,
    pub description: String,
    pub score: f64,
    pub reasons: Vec<String>,
}

/// Errors raised while loading catalogs, building preferences or reading config
#[derive(Debug, Error)]
pub enum StylistError {
    #[error("Duplicate hairstyle: {name}")]
    DuplicateEntry { name: String },

    #[error("Unknown hairstyle: {name}")]
    NotFound { name: String },

    #[error("Unsupported preference field '{field}'")]
    InvalidPreferenceField { field: String },

    #[error("Invalid value for preference '{field}': expected {expected}")]
    InvalidPreferenceValue {
        field: String,
        expected: &'static str,
    },

    #[error(
        "Hairstyle record{} has a blank name",
        .index.map(|i| format!(" at index {i}")).unwrap_or_default()
    )]
    BlankName { index: Option<usize> },

    #[error("Malformed catalog: {0}")]
    MalformedCatalog(String),

    #[error("Invalid catalog record at index {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown scoring weight '{name}'")]
    UnknownWeight { name: String },
}
