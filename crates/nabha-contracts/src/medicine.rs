//! Medicine and per-pharmacy stock records.
//!
//! These are plain display records. `quantity` is free text such as
//! "50+ strips"; no numeric stock invariant is enforced.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::NabhaError;

/// Availability of a medicine at a single pharmacy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "Available")]
    Available,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

/// Visual weight a badge is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
}

impl StockStatus {
    pub fn label(self) -> &'static str {
        match self {
            StockStatus::Available => "Available",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }

    pub fn badge_variant(self) -> BadgeVariant {
        match self {
            StockStatus::Available => BadgeVariant::Default,
            StockStatus::LowStock => BadgeVariant::Secondary,
            StockStatus::OutOfStock => BadgeVariant::Destructive,
        }
    }

    /// Single-character indicator used next to the pharmacy name.
    pub fn glyph(self) -> char {
        match self {
            StockStatus::Available => '✔',
            StockStatus::LowStock => '!',
            StockStatus::OutOfStock => '✘',
        }
    }

    /// True unless the pharmacy has none left.
    pub fn is_obtainable(self) -> bool {
        !matches!(self, StockStatus::OutOfStock)
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StockStatus {
    type Err = NabhaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" => Ok(StockStatus::Available),
            "low stock" | "low-stock" => Ok(StockStatus::LowStock),
            "out of stock" | "out-of-stock" => Ok(StockStatus::OutOfStock),
            _ => Err(NabhaError::UnknownStockStatus {
                value: s.to_string(),
            }),
        }
    }
}

/// One pharmacy's stock entry for a medicine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PharmacyStock {
    /// Pharmacy display name, e.g. "City Pharmacy".
    pub name: String,
    /// Location label, e.g. "Bus Stand".
    pub location: String,
    pub stock: StockStatus,
    /// Display quantity, e.g. "5 strips".
    pub quantity: String,
    /// Contact number handed to the dialer via a `tel:` link.
    pub phone: String,
}

impl PharmacyStock {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        stock: StockStatus,
        quantity: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            stock,
            quantity: quantity.into(),
            phone: phone.into(),
        }
    }

    /// The `tel:` URI for this pharmacy's phone number.
    pub fn tel_link(&self) -> String {
        format!("tel:{}", self.phone)
    }
}

/// A catalog entry: a medicine and where it can be found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medicine {
    pub id: u32,
    pub name: String,
    pub category: String,
    /// Pharmacy entries in display order.
    #[serde(default)]
    pub pharmacies: Vec<PharmacyStock>,
}

impl Medicine {
    pub fn new(id: u32, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            pharmacies: Vec::new(),
        }
    }

    /// Builder-style append of a pharmacy entry.
    pub fn with_pharmacy(mut self, pharmacy: PharmacyStock) -> Self {
        self.pharmacies.push(pharmacy);
        self
    }

    /// Number of pharmacies that are not out of stock.
    pub fn obtainable_count(&self) -> usize {
        self.pharmacies
            .iter()
            .filter(|p| p.stock.is_obtainable())
            .count()
    }
}
