use rand::{SeedableRng, rngs::StdRng};

use crate::profile::{daylight_frac, gaussian_noise};
use crate::sim::types::SimConfig;

/// A synthetic solar generation profile.
///
/// Produces a half-sine shaped daylight curve between sunrise and sunset
/// indices with multiplicative seeded noise, emitted as per-interval energy
/// in kWh. It stands in for retrieved weather/PV data when no prepared
/// series is supplied.
#[derive(Debug, Clone)]
pub struct SolarProfile {
    /// Peak generation power under ideal conditions (kW).
    pub kw_peak: f32,

    /// Interval index of sunrise within the day (inclusive).
    pub sunrise_idx: usize,

    /// Interval index of sunset within the day (exclusive).
    pub sunset_idx: usize,

    /// Standard deviation of the relative noise.
    pub noise_std: f32,

    config: SimConfig,
    rng: StdRng,
}

impl SolarProfile {
    /// Creates a new solar profile generator.
    ///
    /// # Panics
    ///
    /// Panics if `sunrise_idx >= sunset_idx` or `sunset_idx > steps_per_day`.
    pub fn new(
        kw_peak: f32,
        sunrise_idx: usize,
        sunset_idx: usize,
        noise_std: f32,
        config: &SimConfig,
        seed: u64,
    ) -> Self {
        assert!(sunrise_idx < sunset_idx && sunset_idx <= config.steps_per_day);
        Self {
            kw_peak: kw_peak.max(0.0),
            sunrise_idx,
            sunset_idx,
            noise_std: noise_std.max(0.0),
            config: config.clone(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates the per-interval generation series in kWh.
    pub fn generate(&mut self) -> Vec<f32> {
        let total = self.config.total_steps();
        let mut series = Vec::with_capacity(total);

        for t in 0..total {
            let frac = daylight_frac(
                t,
                self.config.steps_per_day,
                self.sunrise_idx,
                self.sunset_idx,
            );
            if frac <= 0.0 {
                series.push(0.0);
                continue;
            }

            let noise_mult = 1.0 + gaussian_noise(&mut self.rng, self.noise_std);
            let kw = (self.kw_peak * frac * noise_mult).max(0.0);
            series.push(kw * self.config.dt_hours);
        }

        series
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> SimConfig {
        SimConfig::new(24, 2, 0)
    }

    #[test]
    fn no_generation_at_night() {
        let series = SolarProfile::new(5.0, 6, 18, 0.0, &cfg(), 42).generate();
        for day in 0..2 {
            for t in [0, 5, 18, 23] {
                assert_eq!(series[day * 24 + t], 0.0);
            }
        }
    }

    #[test]
    fn peak_energy_at_noon() {
        let series = SolarProfile::new(5.0, 6, 18, 0.0, &cfg(), 42).generate();
        // 24 steps/day: dt = 1h, so noon energy approaches kw_peak * 1h
        assert!(series[12] > 4.9 && series[12] <= 5.0);
    }

    #[test]
    fn energy_scales_with_interval_duration() {
        let hourly = SolarProfile::new(5.0, 6, 18, 0.0, &SimConfig::new(24, 1, 0), 42).generate();
        let quarter =
            SolarProfile::new(5.0, 24, 72, 0.0, &SimConfig::new(96, 1, 0), 42).generate();
        // Same noon power, quarter-hour interval carries a quarter of the energy
        assert!((quarter[48] - hourly[12] / 4.0).abs() < 1e-5);
    }

    #[test]
    fn all_values_non_negative() {
        let series = SolarProfile::new(5.0, 6, 18, 0.5, &cfg(), 7).generate();
        assert!(series.iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn same_seed_is_deterministic() {
        let a = SolarProfile::new(5.0, 6, 18, 0.1, &cfg(), 42).generate();
        let b = SolarProfile::new(5.0, 6, 18, 0.1, &cfg(), 42).generate();
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic]
    fn sunset_before_sunrise_panics() {
        SolarProfile::new(5.0, 18, 6, 0.0, &cfg(), 42);
    }

    #[test]
    #[should_panic]
    fn sunset_past_day_end_panics() {
        SolarProfile::new(5.0, 6, 25, 0.0, &cfg(), 42);
    }
}
