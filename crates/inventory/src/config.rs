//! Stock configuration (temperature range, location capacity).

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult};

pub const ENV_MIN_TEMPERATURE: &str = "STOCK_MIN_TEMPERATURE";
pub const ENV_MAX_TEMPERATURE: &str = "STOCK_MAX_TEMPERATURE";
pub const ENV_MAX_STORAGE_LOCATIONS: &str = "STOCK_MAX_STORAGE_LOCATIONS";

/// Limits a [`Stock`](crate::Stock) enforces.
///
/// Both temperature bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockConfig {
    pub min_temperature: f64,
    pub max_temperature: f64,
    pub max_storage_locations: usize,
}

impl StockConfig {
    pub const DEFAULT_MIN_TEMPERATURE: f64 = 20.0;
    pub const DEFAULT_MAX_TEMPERATURE: f64 = 30.0;
    pub const DEFAULT_MAX_STORAGE_LOCATIONS: usize = 3;

    /// Read limits from `STOCK_*` environment variables.
    ///
    /// Unset or unparsable variables fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Self::from_env`], reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            min_temperature: parse_or(&lookup, ENV_MIN_TEMPERATURE, defaults.min_temperature),
            max_temperature: parse_or(&lookup, ENV_MAX_TEMPERATURE, defaults.max_temperature),
            max_storage_locations: parse_or(
                &lookup,
                ENV_MAX_STORAGE_LOCATIONS,
                defaults.max_storage_locations,
            ),
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        if !self.min_temperature.is_finite() || !self.max_temperature.is_finite() {
            return Err(DomainError::invalid_argument("temperature bounds must be finite"));
        }
        if self.min_temperature > self.max_temperature {
            return Err(DomainError::invalid_argument(format!(
                "min temperature {} above max temperature {}",
                self.min_temperature, self.max_temperature
            )));
        }
        if self.max_storage_locations == 0 {
            return Err(DomainError::invalid_argument(
                "a stock must allow at least one storage location",
            ));
        }
        Ok(())
    }

    pub fn accepts_temperature(&self, temperature: f64) -> bool {
        (self.min_temperature..=self.max_temperature).contains(&temperature)
    }
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            min_temperature: Self::DEFAULT_MIN_TEMPERATURE,
            max_temperature: Self::DEFAULT_MAX_TEMPERATURE,
            max_storage_locations: Self::DEFAULT_MAX_STORAGE_LOCATIONS,
        }
    }
}

fn parse_or<T: core::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    lookup(key)
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}
