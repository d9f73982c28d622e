//! Medicine catalog and its TOML representation.
//!
//! A `Catalog` is either the built-in sample data or a TOML document of the
//! following shape:
//!
//! ```toml
//! [[medicines]]
//! id = 1
//! name = "Paracetamol 500mg"
//! category = "Pain Relief"
//!
//! [[medicines.pharmacies]]
//! name = "Nabha Medical Store"
//! location = "Main Market"
//! stock = "Available"
//! quantity = "50+ strips"
//! phone = "+91-9876543210"
//! ```
//!
//! Loading validates the document before it is handed to a view. Once built,
//! a catalog is immutable.

use std::{collections::HashSet, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use nabha_contracts::{Medicine, NabhaError, NabhaResult};

use crate::{filter, mock_data};

/// The top-level structure deserialized from a TOML catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Medicines in display order.
    pub medicines: Vec<Medicine>,
}

/// An immutable, validated list of medicines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    medicines: Vec<Medicine>,
}

impl Catalog {
    /// The built-in five-medicine sample catalog.
    pub fn sample() -> Self {
        Self {
            medicines: mock_data::sample_medicines(),
        }
    }

    /// Build a catalog from medicines, validating them first.
    pub fn new(medicines: Vec<Medicine>) -> NabhaResult<Self> {
        validate(&medicines)?;
        Ok(Self { medicines })
    }

    /// Parse `s` as TOML and build a validated `Catalog`.
    ///
    /// Returns `NabhaError::Catalog` if the TOML is malformed, does not match
    /// `CatalogConfig`, or fails validation.
    pub fn from_toml_str(s: &str) -> NabhaResult<Self> {
        let config: CatalogConfig = toml::from_str(s).map_err(|e| NabhaError::Catalog {
            reason: format!("failed to parse catalog TOML: {}", e),
        })?;
        debug!(medicines = config.medicines.len(), "parsed catalog TOML");
        Self::new(config.medicines)
    }

    /// Read the file at `path` and parse it as a TOML catalog.
    pub fn from_file(path: &Path) -> NabhaResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| NabhaError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Load from `path` if given, otherwise fall back to the sample catalog.
    pub fn load(path: Option<&Path>) -> NabhaResult<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::sample()),
        }
    }

    /// Serialize back to the TOML catalog format.
    pub fn to_toml_string(&self) -> NabhaResult<String> {
        let config = CatalogConfig {
            medicines: self.medicines.clone(),
        };
        toml::to_string(&config).map_err(|e| NabhaError::Serialization {
            reason: format!("failed to serialize catalog: {}", e),
        })
    }

    pub fn medicines(&self) -> &[Medicine] {
        &self.medicines
    }

    pub fn len(&self) -> usize {
        self.medicines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.medicines.is_empty()
    }

    /// Medicines whose name or category contains `query`, case-insensitively.
    pub fn search(&self, query: &str) -> Vec<&Medicine> {
        filter::filter(&self.medicines, query)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}

fn validate(medicines: &[Medicine]) -> NabhaResult<()> {
    if medicines.is_empty() {
        return Err(reject("catalog contains no medicines".to_string()));
    }

    let mut seen = HashSet::new();
    for med in medicines {
        if !seen.insert(med.id) {
            return Err(reject(format!("duplicate medicine id {}", med.id)));
        }
        if med.name.trim().is_empty() {
            return Err(reject(format!("medicine {} has an empty name", med.id)));
        }
        if med.category.trim().is_empty() {
            return Err(reject(format!("medicine '{}' has an empty category", med.name)));
        }
        for pharmacy in &med.pharmacies {
            if pharmacy.name.trim().is_empty() {
                return Err(reject(format!(
                    "medicine '{}' lists a pharmacy with no name",
                    med.name
                )));
            }
            if pharmacy.phone.trim().is_empty() {
                return Err(reject(format!(
                    "pharmacy '{}' for '{}' has no phone number",
                    pharmacy.name, med.name
                )));
            }
        }
    }

    Ok(())
}

fn reject(reason: String) -> NabhaError {
    warn!(reason = %reason, "catalog validation failed");
    NabhaError::Catalog { reason }
}
