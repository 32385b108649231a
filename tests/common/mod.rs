//! Shared test fixtures for integration tests.

use pv_sim::battery::Battery;
use pv_sim::config::ScenarioConfig;
use pv_sim::profile::{DemandProfile, SolarProfile};
use pv_sim::sim::engine::{Engine, Storage};
use pv_sim::sim::types::{IntervalSample, SimConfig};

/// Short simulation span for fast integration runs (quarter-hour, one week).
pub fn week_config(seed: u64) -> SimConfig {
    SimConfig::new(96, 7, seed)
}

/// Builds the synthetic interval series a scenario describes.
pub fn build_series(scenario: &ScenarioConfig, sim: &SimConfig) -> Vec<IntervalSample> {
    let d = &scenario.demand;
    let load = DemandProfile::new(
        d.annual_kwh,
        d.amp_frac,
        d.phase_rad,
        d.noise_std,
        sim,
        sim.seed,
    )
    .generate();

    let s = &scenario.solar;
    let solar = SolarProfile::new(
        s.kw_peak,
        s.sunrise_idx,
        s.sunset_idx,
        s.noise_std,
        sim,
        sim.seed.wrapping_add(1),
    )
    .generate();

    load.into_iter()
        .zip(solar)
        .map(|(l, s)| IntervalSample::new(l, s))
        .collect()
}

/// Builds the engine a scenario describes (battery or pass-through).
pub fn build_engine(scenario: &ScenarioConfig, sim: SimConfig) -> Engine {
    let bat = &scenario.battery;
    let storage = if bat.capacity_kwh > 0.0 {
        Storage::Battery(Battery::new(
            bat.capacity_kwh,
            bat.initial_soc,
            bat.eta_charge,
            bat.eta_discharge,
            bat.min_soc,
        ))
    } else {
        Storage::PassThrough
    };
    Engine::new(sim, scenario.simulation.price_per_kwh, storage)
}
