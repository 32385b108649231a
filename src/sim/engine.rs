//! Allocation engine that walks a (load, solar) series against the battery.

use crate::battery::Battery;

use super::types::{FlowRecord, IntervalSample, SimConfig};

/// Storage strategy for a simulation run, chosen once from the scenario.
///
/// Configuring zero battery capacity selects [`Storage::PassThrough`], a
/// separate code path with no capacity-relative arithmetic, rather than a
/// degenerate battery inside the general loop.
#[derive(Debug, Clone)]
pub enum Storage {
    /// No battery: surplus solar is exported, deficits are imported.
    PassThrough,
    /// Battery-backed allocation.
    Battery(Battery),
}

/// Allocation engine owning the storage state for one run.
///
/// Consumes samples strictly in order; each interval mutates the battery at
/// most once (a charge or a discharge, never both) and emits one
/// [`FlowRecord`]. The run is a pure synchronous fold, so identical input and
/// configuration reproduce identical records.
pub struct Engine {
    config: SimConfig,
    price_per_kwh: f32,
    storage: Storage,
}

impl Engine {
    /// Creates a new allocation engine.
    ///
    /// # Arguments
    ///
    /// * `config` - Simulation timing configuration
    /// * `price_per_kwh` - Grid price used to value avoided imports
    /// * `storage` - Battery or pass-through strategy for this run
    pub fn new(config: SimConfig, price_per_kwh: f32, storage: Storage) -> Self {
        Self {
            config,
            price_per_kwh,
            storage,
        }
    }

    /// Processes one interval sample and returns its flow record.
    ///
    /// Savings are credited for energy the grid did not have to supply:
    /// direct solar consumption plus battery discharge. Charging earns
    /// nothing here; that energy is credited when it comes back out.
    pub fn step(&mut self, t: usize, sample: &IntervalSample) -> FlowRecord {
        let load = sample.load_kwh;
        let solar = sample.solar_kwh;
        let direct = load.min(solar);
        let time_hr = t as f32 * self.config.dt_hours;

        match &mut self.storage {
            Storage::PassThrough => FlowRecord {
                timestep: t,
                time_hr,
                load_kwh: load,
                solar_kwh: solar,
                soc: 0.0,
                battery_charge_kwh: 0.0,
                battery_discharge_kwh: 0.0,
                battery_energy_kwh: 0.0,
                grid_import_kwh: (load - solar).max(0.0),
                solar_to_consume_kwh: direct,
                solar_to_battery_kwh: 0.0,
                solar_to_grid_kwh: (solar - load).max(0.0),
                savings: self.price_per_kwh * direct,
            },
            Storage::Battery(battery) => {
                let net = load - solar;

                let (charged, discharged, import, exported) = if net > 0.0 {
                    let delivered = battery.discharge(net);
                    (0.0, delivered, net - delivered, 0.0)
                } else {
                    let surplus = -net;
                    let stored = battery.charge(surplus);
                    // What the battery accepted at its input terminals;
                    // conversion losses are not export.
                    let accepted = stored / battery.eta_charge;
                    (stored, 0.0, 0.0, (surplus - accepted).max(0.0))
                };

                FlowRecord {
                    timestep: t,
                    time_hr,
                    load_kwh: load,
                    solar_kwh: solar,
                    soc: battery.soc,
                    battery_charge_kwh: charged,
                    battery_discharge_kwh: discharged,
                    battery_energy_kwh: battery.energy_available(),
                    grid_import_kwh: import,
                    solar_to_consume_kwh: direct,
                    solar_to_battery_kwh: charged,
                    solar_to_grid_kwh: exported,
                    savings: self.price_per_kwh * (direct + discharged),
                }
            }
        }
    }

    /// Runs the full series in order and returns all flow records.
    pub fn run(&mut self, series: &[IntervalSample]) -> Vec<FlowRecord> {
        let mut records = Vec::with_capacity(series.len());
        for (t, sample) in series.iter().enumerate() {
            records.push(self.step(t, sample));
        }
        records
    }

    /// Returns the storage strategy (for post-run capacity queries).
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Returns the simulation configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}
