//! Location filter values.
//!
//! The location selector is screen state only. Nothing in the stock engine
//! joins it against `PharmacyStock::location`.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::NabhaError;

/// One entry of the fixed location selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Location {
    #[default]
    All,
    MainMarket,
    BusStand,
    CivilLines,
    HospitalRoad,
}

impl Location {
    /// Every selector option, in display order.
    pub const ALL: [Location; 5] = [
        Location::All,
        Location::MainMarket,
        Location::BusStand,
        Location::CivilLines,
        Location::HospitalRoad,
    ];

    /// The value used on the command line and in serialized state.
    pub fn slug(self) -> &'static str {
        match self {
            Location::All => "all",
            Location::MainMarket => "main-market",
            Location::BusStand => "bus-stand",
            Location::CivilLines => "civil-lines",
            Location::HospitalRoad => "hospital-road",
        }
    }

    /// Human-readable label shown in the selector.
    pub fn label(self) -> &'static str {
        match self {
            Location::All => "All Locations",
            Location::MainMarket => "Main Market",
            Location::BusStand => "Bus Stand",
            Location::CivilLines => "Civil Lines",
            Location::HospitalRoad => "Hospital Road",
        }
    }

    /// The option after this one, wrapping around.
    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The option before this one, wrapping around.
    pub fn prev(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|l| *l == self).unwrap_or(0)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Location {
    type Err = NabhaError;

    /// Parse a slug, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|l| l.slug() == needle)
            .ok_or_else(|| NabhaError::UnknownLocation {
                value: s.to_string(),
            })
    }
}
