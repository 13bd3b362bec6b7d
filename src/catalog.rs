// Hair Stylist Catalog
// Immutable, name-keyed collection of hairstyle entries

use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::data::DataLoader;
use crate::normalize::{normalize_set, normalize_value};
use crate::types::{MaintenanceLevel, Result, StylistError};

const DEFAULT_MAINTENANCE: &str = "medium";

/// A single hairstyle entry
///
/// Attribute sets are lowercase. Equality and hashing use the
/// case-insensitive name only.
#[derive(Debug, Clone)]
pub struct Hairstyle {
    name: String,
    /// Lowercased name, computed once
    key: String,
    description: String,
    face_shapes: BTreeSet<String>,
    hair_lengths: BTreeSet<String>,
    hair_textures: BTreeSet<String>,
    genders: BTreeSet<String>,
    occasions: BTreeSet<String>,
    maintenance: String,
    tags: BTreeSet<String>,
}

impl Hairstyle {
    /// Build a hairstyle from a raw record, normalizing every field
    ///
    /// # Returns
    /// * `Err(BlankName)` - the name is empty after trimming
    pub fn from_record(record: HairstyleRecord) -> Result<Self> {
        let name = record.name.trim().to_string();
        if name.is_empty() {
            return Err(StylistError::BlankName { index: None });
        }

        Ok(Self {
            key: name.to_lowercase(),
            name,
            description: record.description.trim().to_string(),
            face_shapes: record.face_shapes.normalized(),
            hair_lengths: record.hair_lengths.normalized(),
            hair_textures: record.hair_textures.normalized(),
            genders: record.genders.normalized(),
            occasions: record.occasions.normalized(),
            maintenance: record
                .maintenance
                .and_then(|m| normalize_value(Some(m)))
                .unwrap_or_else(|| DEFAULT_MAINTENANCE.to_string()),
            tags: record.tags.normalized(),
        })
    }

    /// Record form with every set sorted, suitable for JSON output
    pub fn to_record(&self) -> HairstyleRecord {
        let list = |set: &BTreeSet<String>| {
            StringList::Many(set.iter().map(|s| Value::String(s.clone())).collect())
        };
        HairstyleRecord {
            name: self.name.clone(),
            description: self.description.clone(),
            face_shapes: list(&self.face_shapes),
            hair_lengths: list(&self.hair_lengths),
            hair_textures: list(&self.hair_textures),
            genders: list(&self.genders),
            occasions: list(&self.occasions),
            maintenance: Some(self.maintenance.clone()),
            tags: list(&self.tags),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn face_shapes(&self) -> &BTreeSet<String> {
        &self.face_shapes
    }

    pub fn hair_lengths(&self) -> &BTreeSet<String> {
        &self.hair_lengths
    }

    pub fn hair_textures(&self) -> &BTreeSet<String> {
        &self.hair_textures
    }

    pub fn genders(&self) -> &BTreeSet<String> {
        &self.genders
    }

    pub fn occasions(&self) -> &BTreeSet<String> {
        &self.occasions
    }

    /// Raw maintenance label (may be outside low/medium/high)
    pub fn maintenance(&self) -> &str {
        &self.maintenance
    }

    /// Maintenance on the ordered scale, if the label is recognized
    pub fn maintenance_level(&self) -> Option<MaintenanceLevel> {
        MaintenanceLevel::from_label(&self.maintenance)
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Lowercased name used for keying and tie-breaking
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl PartialEq for Hairstyle {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Hairstyle {}

impl Hash for Hairstyle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// A string field that may be given as one string or a list of scalars
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringList {
    One(String),
    Many(Vec<Value>),
}

impl Default for StringList {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl StringList {
    fn normalized(&self) -> BTreeSet<String> {
        match self {
            Self::One(value) => normalize_set([value]),
            Self::Many(values) => normalize_set(values.iter().map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })),
        }
    }
}

/// Raw catalog record as stored in JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HairstyleRecord {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub face_shapes: StringList,
    #[serde(default)]
    pub hair_lengths: StringList,
    #[serde(default)]
    pub hair_textures: StringList,
    #[serde(default)]
    pub genders: StringList,
    #[serde(default)]
    pub occasions: StringList,
    #[serde(default)]
    pub maintenance: Option<String>,
    #[serde(default)]
    pub tags: StringList,
}

/// Container for available hairstyles
///
/// Iteration follows insertion order; lookups are case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct HairstyleCatalog {
    /// Entries in insertion order
    styles: Vec<Hairstyle>,

    /// Lowercased name → position in `styles`
    by_name: FxHashMap<String, usize>,
}

impl HairstyleCatalog {
    /// Build a catalog from hairstyles, rejecting duplicate names
    pub fn new(hairstyles: impl IntoIterator<Item = Hairstyle>) -> Result<Self> {
        let mut catalog = Self::default();

        for style in hairstyles {
            let key = style.key().to_string();
            if catalog.by_name.contains_key(&key) {
                return Err(StylistError::DuplicateEntry {
                    name: style.name.clone(),
                });
            }
            catalog.by_name.insert(key, catalog.styles.len());
            catalog.styles.push(style);
        }

        Ok(catalog)
    }

    /// Build a catalog from raw records
    ///
    /// Blank names are reported with the index of the offending record.
    pub fn from_records(records: impl IntoIterator<Item = HairstyleRecord>) -> Result<Self> {
        let styles = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                Hairstyle::from_record(record).map_err(|err| match err {
                    StylistError::BlankName { .. } => StylistError::BlankName {
                        index: Some(index),
                    },
                    other => other,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(styles)
    }

    /// Parse a JSON list of records
    ///
    /// # Returns
    /// * `Err(MalformedCatalog)` - root is not a list
    /// * `Err(InvalidRecord)` - a record could not be decoded
    /// * `Err(DuplicateEntry)` - two records share a name
    pub fn from_json_str(text: &str) -> Result<Self> {
        let items = match serde_json::from_str::<Value>(text)? {
            Value::Array(items) => items,
            other => {
                return Err(StylistError::MalformedCatalog(format!(
                    "hairstyle catalog must contain a list, found {}",
                    json_kind(&other)
                )))
            }
        };

        let records = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value::<HairstyleRecord>(item)
                    .map_err(|source| StylistError::InvalidRecord { index, source })
            })
            .collect::<Result<Vec<_>>>()?;

        let catalog = Self::from_records(records)?;
        tracing::debug!(entries = catalog.len(), "parsed hairstyle catalog");
        Ok(catalog)
    }

    /// Load a catalog from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| StylistError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading hairstyle catalog");
        Self::from_json_str(&text)
    }

    /// Load the catalog bundled with the crate
    pub fn bundled() -> Result<Self> {
        let info = DataLoader::info();
        tracing::debug!(bytes = info.catalog_size, "loading bundled catalog");
        Self::from_json_str(DataLoader::catalog_json())
    }

    /// Find a hairstyle by name (case-insensitive)
    pub fn find(&self, name: &str) -> Result<&Hairstyle> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&idx| &self.styles[idx])
            .ok_or_else(|| StylistError::NotFound {
                name: name.to_string(),
            })
    }

    /// Case-insensitive membership test
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(&name.to_lowercase())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Hairstyle> {
        self.styles.iter()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Return the catalog as records
    pub fn to_records(&self) -> Vec<HairstyleRecord> {
        self.styles.iter().map(Hairstyle::to_record).collect()
    }
}

impl<'a> IntoIterator for &'a HairstyleCatalog {
    type Item = &'a Hairstyle;
    type IntoIter = std::slice::Iter<'a, Hairstyle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
