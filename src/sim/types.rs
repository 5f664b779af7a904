//! Core simulation types: configuration for one seeded run.

/// Centralized simulation configuration for a single run.
///
/// The engine and all helpers reference this struct for timing and
/// station parameters, eliminating duplicated constants.
///
/// # Examples
///
/// ```
/// use evse_sim::sim::types::SimConfig;
///
/// let cfg = SimConfig::new(96, 365, 20, 11.0, 0);
/// assert_eq!(cfg.total_ticks(), 35_040);
/// assert_eq!(cfg.theoretical_max_power_kw(), 220.0);
/// ```
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of ticks per simulated day (96 at 15-minute resolution).
    pub ticks_per_day: usize,
    /// Number of days to simulate.
    pub days: usize,
    /// Number of charging stations at the site.
    pub num_stations: usize,
    /// Rated power per station in kW.
    pub station_power_kw: f64,
    /// Random seed for this run.
    pub seed: u64,
}

impl SimConfig {
    /// Creates a new simulation configuration.
    ///
    /// # Panics
    ///
    /// Panics if `ticks_per_day`, `days`, or `num_stations` is zero, or
    /// if `station_power_kw` is not positive.
    pub fn new(
        ticks_per_day: usize,
        days: usize,
        num_stations: usize,
        station_power_kw: f64,
        seed: u64,
    ) -> Self {
        assert!(ticks_per_day > 0, "ticks_per_day must be > 0");
        assert!(days > 0, "days must be > 0");
        assert!(num_stations > 0, "num_stations must be > 0");
        assert!(station_power_kw > 0.0, "station_power_kw must be > 0");
        Self {
            ticks_per_day,
            days,
            num_stations,
            station_power_kw,
            seed,
        }
    }

    /// The default year-long scenario: 96 ticks/day for 365 days across
    /// 20 stations rated 11 kW.
    pub fn year_default(seed: u64) -> Self {
        Self::new(96, 365, 20, 11.0, seed)
    }

    /// Total number of ticks across all days.
    pub fn total_ticks(&self) -> usize {
        self.ticks_per_day * self.days
    }

    /// Ticks per hour, derived from the tick resolution.
    pub fn ticks_per_hour(&self) -> usize {
        self.ticks_per_day / 24
    }

    /// Upper bound on instantaneous site power: all stations active.
    pub fn theoretical_max_power_kw(&self) -> f64 {
        self.num_stations as f64 * self.station_power_kw
    }
}
