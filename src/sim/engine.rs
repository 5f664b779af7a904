//! Simulation engine: seeded tick loop over arrivals, allocation, and
//! aggregate power statistics.

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::report::RunReport;
use super::station::ChargingStation;
use super::tables::{
    ARRIVALS_PER_TICK, DEMAND_DISTANCE_KM, HOURLY_ARRIVAL_PROBS, KWH_PER_100KM, MIN_SESSION_TICKS,
    PEAK_HOUR_END, PEAK_HOUR_START, PEAK_MULTIPLIER,
};
use super::types::SimConfig;

/// Maps one uniform draw in [0, 1) to a charging demand in kWh.
///
/// Walks the distance table in its defined order, accumulating
/// probability mass, and converts the first bucket whose cumulative
/// mass reaches the draw. A 0 km bucket yields 0 kWh ("no charge").
/// Draws above the table's total mass also yield 0 kWh; the table sums
/// to just under 1.0 and the shortfall is treated as no-charge rather
/// than an error.
pub fn demand_kwh_for_draw(draw: f64) -> f64 {
    let mut cumulative = 0.0;
    for &(km, prob) in DEMAND_DISTANCE_KM {
        cumulative += prob;
        if draw <= cumulative {
            return km * KWH_PER_100KM / 100.0;
        }
    }
    0.0
}

/// Computes a charging-session length in ticks from the energy needed
/// and a jitter factor.
///
/// The base duration is the energy divided by the station rating,
/// converted to ticks and rounded up; the jittered duration is rounded
/// down and floored at [`MIN_SESSION_TICKS`].
pub fn session_ticks(
    energy_kwh: f64,
    jitter: f64,
    station_power_kw: f64,
    ticks_per_hour: usize,
) -> usize {
    let base = (energy_kwh / station_power_kw * ticks_per_hour as f64).ceil();
    let jittered = (base * jitter) as usize;
    jittered.max(MIN_SESSION_TICKS)
}

/// Simulation engine owning the station fleet, aggregate counters, the
/// per-tick power series, and one seeded RNG stream.
///
/// One engine models one run; repeated runs construct fresh engines
/// with their own seeds and are fully independent.
pub struct Engine {
    config: SimConfig,
    stations: Vec<ChargingStation>,
    rng: StdRng,
    total_energy_kwh: f64,
    max_power_demand_kw: f64,
    power_by_tick: Vec<f64>,
}

impl Engine {
    /// Creates an engine with all stations free and counters zeroed,
    /// seeding the RNG from `config.seed`.
    pub fn new(config: SimConfig) -> Self {
        let stations = vec![ChargingStation::new(config.station_power_kw); config.num_stations];
        let rng = StdRng::seed_from_u64(config.seed);
        let capacity = config.total_ticks();
        Self {
            config,
            stations,
            rng,
            total_energy_kwh: 0.0,
            max_power_demand_kw: 0.0,
            power_by_tick: Vec::with_capacity(capacity),
        }
    }

    /// Arrival probability per attempt at the given tick.
    ///
    /// The tick maps to an hour of day; the base hourly probability is
    /// raised by [`PEAK_MULTIPLIER`] inside the evening peak window.
    pub fn arrival_probability(&self, tick: usize) -> f64 {
        let hour = (tick % self.config.ticks_per_day) / self.config.ticks_per_hour();
        let base = HOURLY_ARRIVAL_PROBS[hour];
        if (PEAK_HOUR_START..=PEAK_HOUR_END).contains(&hour) {
            base * PEAK_MULTIPLIER
        } else {
            base
        }
    }

    /// Samples one charging demand in kWh from the engine's RNG stream.
    pub fn sample_charging_demand(&mut self) -> f64 {
        demand_kwh_for_draw(self.rng.random::<f64>())
    }

    /// Returns the index of the first station free at `tick`, scanning
    /// in fixed index order (first-fit, biases load toward low indices).
    pub fn find_available_station(&self, tick: usize) -> Option<usize> {
        self.stations.iter().position(|s| s.is_free(tick))
    }

    /// Draws a jittered session duration for the given energy need.
    pub fn charging_duration_ticks(&mut self, energy_kwh: f64) -> usize {
        let jitter = self.rng.random_range(0.8..=1.2);
        session_ticks(
            energy_kwh,
            jitter,
            self.config.station_power_kw,
            self.config.ticks_per_hour(),
        )
    }

    /// Sum of the ratings of all stations drawing power at `tick`.
    ///
    /// A station draws through and including its `occupied_until` tick,
    /// while the allocator frees it only strictly after; the one-tick
    /// overlap is intentional (see [`ChargingStation`]).
    pub fn instantaneous_power_kw(&self, tick: usize) -> f64 {
        self.stations
            .iter()
            .filter(|s| s.is_drawing(tick))
            .map(|s| s.power_kw)
            .sum()
    }

    /// Executes one tick: records instantaneous power, then runs the
    /// fixed number of independent arrival attempts.
    ///
    /// Per attempt the RNG stream is consumed in a fixed sub-order
    /// (arrival coin, then demand sample, then duration jitter), each
    /// draw happening only when the previous stage succeeded. This
    /// order is what makes runs bit-reproducible under a fixed seed.
    pub fn step(&mut self, tick: usize) {
        let power_kw = self.instantaneous_power_kw(tick);
        self.power_by_tick.push(power_kw);
        self.max_power_demand_kw = self.max_power_demand_kw.max(power_kw);

        let arrival_prob = self.arrival_probability(tick);

        for _ in 0..ARRIVALS_PER_TICK {
            if self.rng.random::<f64>() >= arrival_prob {
                continue;
            }
            // No free station: the arrival is dropped, not queued.
            let Some(idx) = self.find_available_station(tick) else {
                continue;
            };
            let energy_kwh = self.sample_charging_demand();
            if energy_kwh <= 0.0 {
                // No-charge trip: the vehicle occupies nothing.
                continue;
            }
            let duration = self.charging_duration_ticks(energy_kwh);
            self.stations[idx].occupy_until(tick + duration);
            self.total_energy_kwh += energy_kwh;
        }
    }

    /// Runs every tick in sequence and returns the final report.
    pub fn run(&mut self) -> RunReport {
        for tick in 0..self.config.total_ticks() {
            self.step(tick);
        }
        RunReport::new(
            self.total_energy_kwh,
            self.config.theoretical_max_power_kw(),
            self.max_power_demand_kw,
        )
    }

    /// Per-tick site power series recorded so far.
    pub fn power_by_tick(&self) -> &[f64] {
        &self.power_by_tick
    }

    /// Station fleet (for occupancy inspection in tests).
    pub fn stations(&self) -> &[ChargingStation] {
        &self.stations
    }

    /// Total energy delivered so far in kWh.
    pub fn total_energy_kwh(&self) -> f64 {
        self.total_energy_kwh
    }

    /// Highest instantaneous power observed so far in kW.
    pub fn max_power_demand_kw(&self) -> f64 {
        self.max_power_demand_kw
    }

    /// Simulation configuration for this run.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_config(seed: u64) -> SimConfig {
        SimConfig::new(96, 2, 4, 11.0, seed)
    }

    #[test]
    fn demand_draw_zero_hits_no_charge_bucket() {
        assert_eq!(demand_kwh_for_draw(0.0), 0.0);
    }

    #[test]
    fn demand_draw_selects_bucket_by_cumulative_mass() {
        // First bucket covers (0, 0.3431]; the 5 km bucket covers
        // (0.3431, 0.3921].
        assert_eq!(demand_kwh_for_draw(0.3431), 0.0);
        assert_eq!(demand_kwh_for_draw(0.3432), 0.9);
        assert_eq!(demand_kwh_for_draw(0.3921), 0.9);
    }

    #[test]
    fn demand_draw_last_bucket_and_fallback() {
        // 300 km bucket ends at the table's total mass, 0.9997.
        assert_eq!(demand_kwh_for_draw(0.9996), 54.0);
        // Above the total mass the sampler silently reports no charge.
        assert_eq!(demand_kwh_for_draw(0.9999), 0.0);
    }

    #[test]
    fn session_ticks_one_hour_at_rated_power() {
        // 11 kWh at 11 kW is one hour, four ticks.
        assert_eq!(session_ticks(11.0, 1.0, 11.0, 4), 4);
        assert_eq!(session_ticks(11.0, 0.8, 11.0, 4), 3);
        assert_eq!(session_ticks(11.0, 1.2, 11.0, 4), 4);
    }

    #[test]
    fn session_ticks_floors_at_minimum() {
        // 0.9 kWh rounds up to one tick, jitter cannot go below the
        // 30-minute minimum.
        assert_eq!(session_ticks(0.9, 0.8, 11.0, 4), 2);
        assert_eq!(session_ticks(0.9, 1.2, 11.0, 4), 2);
    }

    #[test]
    fn arrival_probability_maps_tick_to_hour() {
        let engine = Engine::new(short_config(0));
        // Tick 0 is hour 0; tick 40 of any day is hour 10.
        assert_eq!(engine.arrival_probability(0), 0.0094);
        assert_eq!(engine.arrival_probability(40), 0.0566);
        // Second day wraps to the same hours.
        assert_eq!(engine.arrival_probability(96), 0.0094);
    }

    #[test]
    fn arrival_probability_applies_evening_peak() {
        let engine = Engine::new(short_config(0));
        // Hour 16 starts at tick 64.
        assert_eq!(engine.arrival_probability(64), 0.1038 * 1.5);
        // Hour 18 (tick 72) is the last peak hour; hour 19 is not.
        assert_eq!(engine.arrival_probability(72), 0.1038 * 1.5);
        assert_eq!(engine.arrival_probability(76), 0.0472);
    }

    #[test]
    fn allocator_is_first_fit() {
        let mut engine = Engine::new(short_config(0));
        assert_eq!(engine.find_available_station(0), Some(0));

        engine.stations[0].occupy_until(10);
        assert_eq!(engine.find_available_station(5), Some(1));

        // Station 0 frees strictly after its inclusive last tick and
        // wins again by index order.
        assert_eq!(engine.find_available_station(11), Some(0));
    }

    #[test]
    fn allocator_returns_none_when_saturated() {
        let mut engine = Engine::new(short_config(0));
        for s in &mut engine.stations {
            s.occupy_until(50);
        }
        assert_eq!(engine.find_available_station(20), None);
        assert_eq!(engine.find_available_station(51), Some(0));
    }

    #[test]
    fn step_records_power_before_arrivals() {
        let mut engine = Engine::new(short_config(0));
        engine.stations[0].occupy_until(3);
        engine.stations[2].occupy_until(3);

        engine.step(0);
        assert_eq!(engine.power_by_tick(), &[22.0]);
        assert_eq!(engine.max_power_demand_kw(), 22.0);
    }

    #[test]
    fn power_series_matches_station_snapshot_each_tick() {
        let mut engine = Engine::new(short_config(3));
        for tick in 0..engine.config().total_ticks() {
            let expected: f64 = engine
                .stations()
                .iter()
                .filter(|s| s.is_drawing(tick))
                .map(|s| s.power_kw)
                .sum();
            engine.step(tick);
            assert_eq!(engine.power_by_tick()[tick], expected, "tick {tick}");
        }
    }

    #[test]
    fn max_power_equals_series_maximum() {
        let mut engine = Engine::new(short_config(1));
        engine.run();
        let series_max = engine
            .power_by_tick()
            .iter()
            .fold(0.0_f64, |acc, &p| acc.max(p));
        assert_eq!(engine.max_power_demand_kw(), series_max);
    }

    #[test]
    fn run_fills_series_and_bounds_report() {
        let mut engine = Engine::new(short_config(2));
        let report = engine.run();

        assert_eq!(engine.power_by_tick().len(), 192);
        assert!(report.total_energy_kwh >= 0.0);
        assert_eq!(report.theoretical_max_power_kw, 44.0);
        assert!(report.actual_max_power_kw <= report.theoretical_max_power_kw);
        assert!((0.0..=100.0).contains(&report.concurrency_factor_pct));
    }

    #[test]
    fn identical_seeds_are_bit_reproducible() {
        let mut a = Engine::new(short_config(42));
        let mut b = Engine::new(short_config(42));
        let ra = a.run();
        let rb = b.run();

        assert_eq!(a.power_by_tick(), b.power_by_tick());
        assert_eq!(ra.total_energy_kwh, rb.total_energy_kwh);
        assert_eq!(ra.actual_max_power_kw, rb.actual_max_power_kw);
        assert_eq!(ra.concurrency_factor_pct, rb.concurrency_factor_pct);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = Engine::new(short_config(0));
        let mut b = Engine::new(short_config(1));
        a.run();
        b.run();
        assert_ne!(a.power_by_tick(), b.power_by_tick());
    }
}
