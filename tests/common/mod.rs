//! Shared test fixtures for integration tests.

use evse_sim::sim::engine::Engine;
use evse_sim::sim::types::SimConfig;

/// Default year-long configuration (96 ticks/day, 365 days, 20 stations).
pub fn year_config(seed: u64) -> SimConfig {
    SimConfig::year_default(seed)
}

/// A week-long configuration for tests that do not need a full year.
pub fn week_config(seed: u64) -> SimConfig {
    SimConfig::new(96, 7, 20, 11.0, seed)
}

/// Builds an engine for the given configuration.
pub fn engine(config: SimConfig) -> Engine {
    Engine::new(config)
}
