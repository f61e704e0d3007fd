//! Rate table configuration
//!
//! The nightly rate table ships with built-in defaults and can be overridden by a
//! JSON file, either at the user config location or at an explicit path. The table
//! is always passed explicitly to the pricing functions rather than living in
//! module-level state.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BookingError, Result};
use crate::pricing::RoomType;

/// Built-in nightly rates, in whole currency units.
pub const DEFAULT_STANDARD_RATE: u64 = 99;
pub const DEFAULT_DELUXE_RATE: u64 = 149;
pub const DEFAULT_SUITE_RATE: u64 = 249;

/// Nightly rate per room type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RateTable {
    pub standard: u64,
    pub deluxe: u64,
    pub suite: u64,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            standard: DEFAULT_STANDARD_RATE,
            deluxe: DEFAULT_DELUXE_RATE,
            suite: DEFAULT_SUITE_RATE,
        }
    }
}

impl RateTable {
    /// Nightly rate for a known room type.
    pub fn rate(&self, room_type: RoomType) -> u64 {
        match room_type {
            RoomType::Standard => self.standard,
            RoomType::Deluxe => self.deluxe,
            RoomType::Suite => self.suite,
        }
    }

    /// Nightly rate looked up by raw form input. Unknown keys yield `None`.
    pub fn rate_for_key(&self, key: &str) -> Option<u64> {
        key.parse::<RoomType>().ok().map(|room| self.rate(room))
    }

    /// Load a rate table from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            BookingError::io_error(
                "read rate table",
                Some(path.display().to_string()),
                e,
            )
        })?;
        let table: Self = serde_json::from_str(&contents)
            .map_err(|e| BookingError::rates_file(path.display().to_string(), e.to_string()))?;
        table.validate(path)?;
        Ok(table)
    }

    /// Resolve the effective rate table.
    ///
    /// An explicit path must load successfully. Without one, the default config
    /// location is used when present, otherwise the built-in defaults apply.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            let table = Self::from_file(path)?;
            tracing::debug!(path = %path.display(), "Loaded rate table");
            return Ok(table);
        }

        if let Some(path) = Self::default_path() {
            if path.exists() {
                let table = Self::from_file(&path)?;
                tracing::debug!(path = %path.display(), "Loaded rate table");
                return Ok(table);
            }
        }

        Ok(Self::default())
    }

    /// Default location of the rate table file under the user config directory.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "booking-helper", "booking-helper")
            .map(|dirs| dirs.config_dir().join("rates.json"))
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.standard == 0 || self.deluxe == 0 || self.suite == 0 {
            return Err(BookingError::rates_file(
                path.display().to_string(),
                "nightly rates must be positive",
            ));
        }
        Ok(())
    }
}
