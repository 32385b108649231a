//! Core simulation types: configuration, input samples, and flow records.

use std::fmt;

/// Centralized simulation timing configuration.
///
/// The allocation engine itself is interval-duration-agnostic (it works on
/// per-interval energies); `dt_hours` only feeds profile generation and the
/// `time_hr` column of the output records.
///
/// # Examples
///
/// ```
/// use pv_sim::sim::types::SimConfig;
///
/// let cfg = SimConfig::new(96, 365, 42);
/// assert_eq!(cfg.dt_hours, 0.25);
/// assert_eq!(cfg.total_steps(), 35_040);
/// ```
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulation intervals per day.
    pub steps_per_day: usize,
    /// Number of days to simulate.
    pub days: usize,
    /// Duration of one interval in hours, derived as `24.0 / steps_per_day`.
    pub dt_hours: f32,
    /// Master random seed for profile generation.
    pub seed: u64,
}

impl SimConfig {
    /// Creates a new simulation configuration.
    ///
    /// # Panics
    ///
    /// Panics if `steps_per_day` or `days` is zero.
    pub fn new(steps_per_day: usize, days: usize, seed: u64) -> Self {
        assert!(steps_per_day > 0, "steps_per_day must be > 0");
        assert!(days > 0, "days must be > 0");
        Self {
            steps_per_day,
            days,
            dt_hours: 24.0 / steps_per_day as f32,
            seed,
        }
    }

    /// Total number of simulation intervals across all days.
    pub fn total_steps(&self) -> usize {
        self.steps_per_day * self.days
    }
}

/// One input interval: household load and solar generation in kWh.
///
/// Samples must be fed to the engine in chronological order; gap filling and
/// alignment are the data-preparation layer's responsibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalSample {
    /// Household consumption during the interval (kWh, >= 0).
    pub load_kwh: f32,
    /// Solar generation during the interval (kWh, >= 0).
    pub solar_kwh: f32,
}

impl IntervalSample {
    pub fn new(load_kwh: f32, solar_kwh: f32) -> Self {
        Self { load_kwh, solar_kwh }
    }
}

/// Complete energy-flow record for one interval.
#[derive(Debug, Clone)]
pub struct FlowRecord {
    /// Interval index.
    pub timestep: usize,
    /// Simulation time in hours.
    pub time_hr: f32,
    /// Household consumption (kWh).
    pub load_kwh: f32,
    /// Solar generation (kWh).
    pub solar_kwh: f32,
    /// Battery state of charge after this interval (0.0 to 1.0; 0 without battery).
    pub soc: f32,
    /// Energy stored into the battery this interval (kWh, post-efficiency).
    pub battery_charge_kwh: f32,
    /// Energy delivered from the battery to the load this interval (kWh).
    pub battery_discharge_kwh: f32,
    /// Absolute energy held in the battery after this interval (kWh).
    pub battery_energy_kwh: f32,
    /// Energy imported from the grid (kWh).
    pub grid_import_kwh: f32,
    /// Solar energy consumed directly by the load (kWh).
    pub solar_to_consume_kwh: f32,
    /// Solar energy routed into the battery (kWh, post-efficiency).
    pub solar_to_battery_kwh: f32,
    /// Surplus solar neither consumed nor accepted by the battery (kWh).
    pub solar_to_grid_kwh: f32,
    /// Money saved this interval versus importing everything from the grid.
    pub savings: f32,
}

impl fmt::Display for FlowRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "t={:>5} ({:>7.2}h) | load={:.3} solar={:.3} kWh | \
             direct={:.3}  to_bat={:.3}  from_bat={:.3}  to_grid={:.3}  import={:.3} \
             (SoC={:.1}%) | saved={:.4}",
            self.timestep,
            self.time_hr,
            self.load_kwh,
            self.solar_kwh,
            self.solar_to_consume_kwh,
            self.solar_to_battery_kwh,
            self.battery_discharge_kwh,
            self.solar_to_grid_kwh,
            self.grid_import_kwh,
            self.soc * 100.0,
            self.savings,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sim_config_basic() {
        let cfg = SimConfig::new(24, 1, 42);
        assert_eq!(cfg.steps_per_day, 24);
        assert_eq!(cfg.days, 1);
        assert_eq!(cfg.dt_hours, 1.0);
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.total_steps(), 24);
    }

    #[test]
    fn sim_config_quarter_hour_year() {
        let cfg = SimConfig::new(96, 365, 0);
        assert_eq!(cfg.dt_hours, 0.25);
        assert_eq!(cfg.total_steps(), 35_040);
    }

    #[test]
    #[should_panic]
    fn sim_config_zero_steps_panics() {
        SimConfig::new(0, 1, 0);
    }

    #[test]
    #[should_panic]
    fn sim_config_zero_days_panics() {
        SimConfig::new(24, 0, 0);
    }

    #[test]
    fn flow_record_display_does_not_panic() {
        let r = FlowRecord {
            timestep: 3,
            time_hr: 0.75,
            load_kwh: 0.4,
            solar_kwh: 0.6,
            soc: 0.23,
            battery_charge_kwh: 0.18,
            battery_discharge_kwh: 0.0,
            battery_energy_kwh: 0.46,
            grid_import_kwh: 0.0,
            solar_to_consume_kwh: 0.4,
            solar_to_battery_kwh: 0.18,
            solar_to_grid_kwh: 0.02,
            savings: 0.14,
        };
        let s = format!("{r}");
        assert!(!s.is_empty());
    }
}
