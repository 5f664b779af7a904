//! Year-long EV charging-station utilization simulator.

pub mod config;
/// CSV telemetry export.
pub mod io;
/// Simulation engine, station model, tables, and run reports.
pub mod sim;
