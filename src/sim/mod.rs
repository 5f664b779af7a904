pub mod engine;
/// End-of-run summary statistics and formatting.
pub mod report;
/// Charging-station occupancy model.
pub mod station;
pub mod tables;
pub mod types;
