//! TOML-based scenario configuration.
//!
//! The probability tables are model inputs and stay fixed in
//! [`crate::sim::tables`]; the scenario only covers run dimensions and
//! the station fleet.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::sim::types::SimConfig;

/// Top-level scenario configuration parsed from TOML.
///
/// All fields default to the baseline year-long scenario. Load from
/// TOML with [`ScenarioConfig::from_toml_file`] or use
/// [`ScenarioConfig::baseline`] for the built-in default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Simulation timing and multi-run parameters.
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Charging-station fleet parameters.
    #[serde(default)]
    pub station: StationConfig,
}

/// Simulation timing and multi-run parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Ticks per simulated day (must be > 0 and divide 24 hours evenly).
    pub ticks_per_day: usize,
    /// Number of days per run (must be > 0).
    pub days: usize,
    /// Number of independent seeded runs (must be > 0).
    pub runs: usize,
    /// Seed of the first run; run `i` uses `base_seed + i`.
    pub base_seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            ticks_per_day: 96,
            days: 365,
            runs: 10,
            base_seed: 0,
        }
    }
}

/// Charging-station fleet parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StationConfig {
    /// Number of stations at the site (must be > 0).
    pub count: usize,
    /// Rated power per station (kW, must be > 0).
    pub power_kw: f64,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            count: 20,
            power_kw: 11.0,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"station.count"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl ScenarioConfig {
    /// Returns the baseline scenario: 10 seeded year-long runs across
    /// 20 stations rated 11 kW.
    pub fn baseline() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            station: StationConfig::default(),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML
    /// is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains
    /// unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let s = &self.simulation;

        if s.ticks_per_day == 0 {
            errors.push(ConfigError {
                field: "simulation.ticks_per_day".into(),
                message: "must be > 0".into(),
            });
        } else if s.ticks_per_day % 24 != 0 {
            errors.push(ConfigError {
                field: "simulation.ticks_per_day".into(),
                message: "must be a multiple of 24 so ticks map to whole hours".into(),
            });
        }
        if s.days == 0 {
            errors.push(ConfigError {
                field: "simulation.days".into(),
                message: "must be > 0".into(),
            });
        }
        if s.runs == 0 {
            errors.push(ConfigError {
                field: "simulation.runs".into(),
                message: "must be > 0".into(),
            });
        }

        let st = &self.station;
        if st.count == 0 {
            errors.push(ConfigError {
                field: "station.count".into(),
                message: "must be > 0".into(),
            });
        }
        if st.power_kw <= 0.0 {
            errors.push(ConfigError {
                field: "station.power_kw".into(),
                message: "must be > 0".into(),
            });
        }

        errors
    }

    /// Builds the per-run engine configuration for run `run_index`.
    ///
    /// Call only on a validated scenario; `SimConfig::new` asserts the
    /// same invariants `validate` reports.
    pub fn sim_config_for_run(&self, run_index: usize) -> SimConfig {
        SimConfig::new(
            self.simulation.ticks_per_day,
            self.simulation.days,
            self.station.count,
            self.station.power_kw,
            self.simulation.base_seed + run_index as u64,
        )
    }
}
