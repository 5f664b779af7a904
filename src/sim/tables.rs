//! Fixed probability tables and model constants.
//!
//! The tables are model inputs, not configuration: they describe driver
//! behavior at a public charging site and are deliberately not exposed
//! through the scenario config.

/// Base vehicle-arrival probability per attempt, indexed by hour of day.
///
/// Sampled once per attempt, [`ARRIVALS_PER_TICK`] attempts per tick.
/// The evening peak multiplier is applied on top of these values, see
/// [`PEAK_MULTIPLIER`].
pub const HOURLY_ARRIVAL_PROBS: [f64; 24] = [
    0.0094, 0.0094, 0.0094, 0.0094, 0.0094, 0.0094, // 00-05
    0.0094, 0.0094, 0.0283, 0.0283, 0.0566, 0.0566, // 06-11
    0.0566, 0.0755, 0.0755, 0.0755, 0.1038, 0.1038, // 12-17
    0.1038, 0.0472, 0.0472, 0.0472, 0.0094, 0.0094, // 18-23
];

/// Trip-distance distribution: ordered `(distance_km, probability)` pairs.
///
/// The order is semantic: demand sampling walks this slice accumulating
/// probability mass, so reordering entries changes which bucket a given
/// uniform draw lands in. Distance 0 means the arriving vehicle does not
/// charge. The masses sum to 0.9997; draws above that fall through to
/// "no charge".
pub const DEMAND_DISTANCE_KM: &[(f64, f64)] = &[
    (0.0, 0.3431),
    (5.0, 0.0490),
    (10.0, 0.0980),
    (20.0, 0.1176),
    (30.0, 0.0882),
    (50.0, 0.1176),
    (100.0, 0.1078),
    (200.0, 0.0490),
    (300.0, 0.0294),
];

/// Vehicle energy consumption in kWh per 100 km driven.
pub const KWH_PER_100KM: f64 = 18.0;

/// First hour (inclusive) of the elevated-arrival evening window.
pub const PEAK_HOUR_START: usize = 16;
/// Last hour (inclusive) of the elevated-arrival evening window.
pub const PEAK_HOUR_END: usize = 18;

/// Arrival-probability multiplier inside the evening peak window.
pub const PEAK_MULTIPLIER: f64 = 1.5;

/// Independent Bernoulli arrival attempts per tick.
pub const ARRIVALS_PER_TICK: usize = 4;

/// Minimum charging-session length in ticks (30 minutes).
pub const MIN_SESSION_TICKS: usize = 2;
