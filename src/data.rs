// Data loader for the embedded hairstyle catalog
// Catalog JSON is compiled into the binary

/// Embedded hairstyle catalog (JSON list of records)
pub const CATALOG_JSON: &str = include_str!("../data/hairstyles.json");

/// Data loader utility
pub struct DataLoader;

impl DataLoader {
    /// Get the bundled catalog source
    pub fn catalog_json() -> &'static str {
        CATALOG_JSON
    }

    /// Get embedded data info
    pub fn info() -> DataInfo {
        DataInfo {
            catalog_size: CATALOG_JSON.len(),
        }
    }
}

/// Information about embedded data, logged when the bundled catalog loads
#[derive(Debug, Clone)]
pub struct DataInfo {
    /// Size of the catalog JSON in bytes
    pub catalog_size: usize,
}
