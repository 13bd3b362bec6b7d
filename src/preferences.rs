// Hair Stylist Client Preferences
// Normalized description of what a client is looking for

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::normalize::{normalize_set, normalize_value};
use crate::types::{Result, StylistError};

/// Structured, normalized information about a client's goals
///
/// All values are stored trimmed and lowercase; empty scalars are absent.
/// Build one with the `with_*` methods or from a loose JSON mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientPreferences {
    face_shape: Option<String>,
    hair_length: Option<String>,
    hair_texture: Option<String>,
    gender: Option<String>,
    occasion: Option<String>,
    maintenance: Option<String>,
    keywords: BTreeSet<String>,
    avoid: BTreeSet<String>,
}

impl ClientPreferences {
    /// Empty preferences (every field absent)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_face_shape(mut self, value: impl AsRef<str>) -> Self {
        self.face_shape = normalize_value(Some(value));
        self
    }

    pub fn with_hair_length(mut self, value: impl AsRef<str>) -> Self {
        self.hair_length = normalize_value(Some(value));
        self
    }

    pub fn with_hair_texture(mut self, value: impl AsRef<str>) -> Self {
        self.hair_texture = normalize_value(Some(value));
        self
    }

    pub fn with_gender(mut self, value: impl AsRef<str>) -> Self {
        self.gender = normalize_value(Some(value));
        self
    }

    pub fn with_occasion(mut self, value: impl AsRef<str>) -> Self {
        self.occasion = normalize_value(Some(value));
        self
    }

    pub fn with_maintenance(mut self, value: impl AsRef<str>) -> Self {
        self.maintenance = normalize_value(Some(value));
        self
    }

    /// Replace the keyword set
    pub fn with_keywords<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.keywords = normalize_set(values);
        self
    }

    /// Replace the avoid set
    pub fn with_avoid<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.avoid = normalize_set(values);
        self
    }

    /// Create preferences from a loosely structured JSON object
    ///
    /// `tags` is accepted as a synonym for `keywords` when `keywords` is
    /// absent or empty. Any other unknown key is rejected.
    ///
    /// # Example
    /// ```
    /// # use ai_hair_stylist::ClientPreferences;
    /// let prefs = ClientPreferences::from_json_str(r#"{"face_shape": "Heart", "tags": ["Volume"]}"#)?;
    /// assert_eq!(prefs.face_shape(), Some("heart"));
    /// assert!(prefs.keywords().contains("volume"));
    /// # Ok::<(), ai_hair_stylist::StylistError>(())
    /// ```
    pub fn from_map(payload: &Map<String, Value>) -> Result<Self> {
        let mut prefs = Self::default();

        let keywords = payload.get("keywords").filter(|v| !is_empty_value(v));
        let tags = payload.get("tags");
        match (keywords, tags) {
            (Some(_), Some(_)) => {
                return Err(StylistError::InvalidPreferenceField {
                    field: "tags".to_string(),
                })
            }
            (Some(source), None) => prefs.keywords = set_from_value("keywords", source)?,
            (None, Some(source)) => prefs.keywords = set_from_value("tags", source)?,
            (None, None) => {}
        }

        for (key, value) in payload {
            match key.as_str() {
                "face_shape" => prefs.face_shape = scalar_from_value(key, value)?,
                "hair_length" => prefs.hair_length = scalar_from_value(key, value)?,
                "hair_texture" => prefs.hair_texture = scalar_from_value(key, value)?,
                "gender" => prefs.gender = scalar_from_value(key, value)?,
                "occasion" => prefs.occasion = scalar_from_value(key, value)?,
                "maintenance" => prefs.maintenance = scalar_from_value(key, value)?,
                "avoid" => prefs.avoid = set_from_value(key, value)?,
                "keywords" | "tags" => {}
                other => {
                    return Err(StylistError::InvalidPreferenceField {
                        field: other.to_string(),
                    })
                }
            }
        }

        Ok(prefs)
    }

    /// Parse a JSON object and build preferences from it
    pub fn from_json_str(text: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(text)? {
            Value::Object(map) => Self::from_map(&map),
            _ => Err(StylistError::InvalidPreferenceValue {
                field: "<root>".to_string(),
                expected: "a JSON object",
            }),
        }
    }

    pub fn face_shape(&self) -> Option<&str> {
        self.face_shape.as_deref()
    }

    pub fn hair_length(&self) -> Option<&str> {
        self.hair_length.as_deref()
    }

    pub fn hair_texture(&self) -> Option<&str> {
        self.hair_texture.as_deref()
    }

    pub fn gender(&self) -> Option<&str> {
        self.gender.as_deref()
    }

    pub fn occasion(&self) -> Option<&str> {
        self.occasion.as_deref()
    }

    pub fn maintenance(&self) -> Option<&str> {
        self.maintenance.as_deref()
    }

    pub fn keywords(&self) -> &BTreeSet<String> {
        &self.keywords
    }

    pub fn avoid(&self) -> &BTreeSet<String> {
        &self.avoid
    }

    /// Whether no field is set at all
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Human readable summary of the active preferences
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if let Some(v) = &self.face_shape {
            parts.push(format!("face shape {}", v));
        }
        if let Some(v) = &self.hair_length {
            parts.push(format!("{} length", v));
        }
        if let Some(v) = &self.hair_texture {
            parts.push(format!("{} texture", v));
        }
        if let Some(v) = &self.gender {
            parts.push(format!("for {} clients", v));
        }
        if let Some(v) = &self.occasion {
            parts.push(format!("for {} occasions", v));
        }
        if let Some(v) = &self.maintenance {
            parts.push(format!("{} maintenance", v));
        }
        if !self.keywords.is_empty() {
            parts.push(format!("keywords: {}", join(&self.keywords)));
        }
        if !self.avoid.is_empty() {
            parts.push(format!("avoid: {}", join(&self.avoid)));
        }

        if parts.is_empty() {
            "general preferences".to_string()
        } else {
            parts.join("; ")
        }
    }

    /// Return new preferences with additional keywords
    pub fn merge_keywords<I, S>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut merged = self.clone();
        merged.keywords.extend(normalize_set(extra));
        merged
    }
}

fn join(values: &BTreeSet<String>) -> String {
    values.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn scalar_from_value(field: &str, value: &Value) -> Result<Option<String>> {
    if value.is_null() {
        return Ok(None);
    }
    scalar_text(value)
        .map(|text| normalize_value(Some(text)))
        .ok_or_else(|| StylistError::InvalidPreferenceValue {
            field: field.to_string(),
            expected: "a string",
        })
}

fn set_from_value(field: &str, value: &Value) -> Result<BTreeSet<String>> {
    let invalid = || StylistError::InvalidPreferenceValue {
        field: field.to_string(),
        expected: "a string or a list of strings",
    };

    match value {
        Value::Null => Ok(BTreeSet::new()),
        Value::Array(items) => {
            let texts = items
                .iter()
                .map(|item| scalar_text(item).ok_or_else(invalid))
                .collect::<Result<Vec<_>>>()?;
            Ok(normalize_set(texts))
        }
        other => scalar_text(other)
            .map(|text| normalize_set([text]))
            .ok_or_else(invalid),
    }
}
