//! Charging-station occupancy model.

/// One physical charging point.
///
/// Occupancy is tracked as the inclusive last busy tick. The two sides
/// of the boundary are deliberately asymmetric: a station still counts
/// toward site power at its `occupied_until` tick (`is_drawing`) while
/// the allocator already treats it as taken (`is_free` is false). Do
/// not collapse the two checks into one comparator; the one-tick
/// overlap is part of the model and shifts the peak-power statistics.
#[derive(Debug, Clone)]
pub struct ChargingStation {
    /// Rated charging power in kW, constant for the station's lifetime.
    pub power_kw: f64,
    /// Inclusive last tick during which the station is busy; `None`
    /// means free since simulation start.
    pub occupied_until: Option<usize>,
}

impl ChargingStation {
    /// Creates a free station with the given power rating.
    pub fn new(power_kw: f64) -> Self {
        Self {
            power_kw,
            occupied_until: None,
        }
    }

    /// Returns `true` when the station can accept a vehicle at `tick`
    /// (its busy window ended strictly before this tick).
    pub fn is_free(&self, tick: usize) -> bool {
        match self.occupied_until {
            None => true,
            Some(until) => until < tick,
        }
    }

    /// Returns `true` when the station draws power at `tick` (busy
    /// through and including `occupied_until`).
    pub fn is_drawing(&self, tick: usize) -> bool {
        match self.occupied_until {
            None => false,
            Some(until) => until >= tick,
        }
    }

    /// Marks the station busy through `last_tick` inclusive.
    pub fn occupy_until(&mut self, last_tick: usize) {
        self.occupied_until = Some(last_tick);
    }
}
