//! End-of-run summary statistics.

use std::fmt;

/// Read-only summary of one completed run.
///
/// Computed once at run end from the engine's aggregate counters.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Total energy delivered over the run (kWh).
    pub total_energy_kwh: f64,
    /// Station count times per-station rating (kW).
    pub theoretical_max_power_kw: f64,
    /// Highest instantaneous site power observed (kW).
    pub actual_max_power_kw: f64,
    /// Peak utilization relative to the theoretical maximum (%).
    pub concurrency_factor_pct: f64,
}

impl RunReport {
    /// Builds the report, deriving the concurrency factor.
    pub fn new(
        total_energy_kwh: f64,
        theoretical_max_power_kw: f64,
        actual_max_power_kw: f64,
    ) -> Self {
        Self {
            total_energy_kwh,
            theoretical_max_power_kw,
            actual_max_power_kw,
            concurrency_factor_pct: actual_max_power_kw / theoretical_max_power_kw * 100.0,
        }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Energy Consumed: {:.2} kWh", self.total_energy_kwh)?;
        writeln!(
            f,
            "Theoretical Maximum Power: {:.2} kW",
            self.theoretical_max_power_kw
        )?;
        writeln!(f, "Actual Maximum Power: {:.2} kW", self.actual_max_power_kw)?;
        write!(f, "Concurrency Factor: {:.2}%", self.concurrency_factor_pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concurrency_factor_is_derived() {
        let r = RunReport::new(1000.0, 220.0, 110.0);
        assert_eq!(r.concurrency_factor_pct, 50.0);
    }

    #[test]
    fn display_formats_two_decimals() {
        let r = RunReport::new(1234.5, 220.0, 99.0);
        let s = format!("{r}");
        assert!(s.contains("Total Energy Consumed: 1234.50 kWh"));
        assert!(s.contains("Theoretical Maximum Power: 220.00 kW"));
        assert!(s.contains("Actual Maximum Power: 99.00 kW"));
        assert!(s.contains("Concurrency Factor: 45.00%"));
    }
}
