use rand::{SeedableRng, rngs::StdRng};

use crate::profile::gaussian_noise;
use crate::sim::types::SimConfig;

/// A synthetic household demand profile.
///
/// `DemandProfile` produces a sinusoidal daily consumption shape with seeded
/// Gaussian noise, then scales the series so its total equals the configured
/// annual energy prorated by the simulated span. It stands in for a standard
/// load profile when no prepared series is supplied.
#[derive(Debug, Clone)]
pub struct DemandProfile {
    /// Annual household consumption the series is scaled to (kWh/year).
    pub annual_kwh: f32,

    /// Amplitude of the daily variation as a fraction of the mean.
    pub amp_frac: f32,

    /// Phase offset of the daily pattern in radians.
    pub phase_rad: f32,

    /// Standard deviation of the relative Gaussian noise.
    pub noise_std: f32,

    config: SimConfig,
    rng: StdRng,
}

impl DemandProfile {
    /// Creates a new demand profile generator.
    ///
    /// # Arguments
    ///
    /// * `annual_kwh` - Annual consumption the series is scaled to
    /// * `amp_frac` - Relative amplitude of the daily sinusoid (e.g. 0.6)
    /// * `phase_rad` - Phase offset in radians
    /// * `noise_std` - Relative noise standard deviation
    /// * `config` - Simulation timing configuration
    /// * `seed` - Random seed for reproducible noise
    pub fn new(
        annual_kwh: f32,
        amp_frac: f32,
        phase_rad: f32,
        noise_std: f32,
        config: &SimConfig,
        seed: u64,
    ) -> Self {
        Self {
            annual_kwh: annual_kwh.max(0.0),
            amp_frac: amp_frac.max(0.0),
            phase_rad,
            noise_std: noise_std.max(0.0),
            config: config.clone(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates the per-interval consumption series in kWh.
    ///
    /// The raw shape is `1 + amp_frac * sin(...) + noise`, clamped at zero,
    /// then rescaled so the series sums to `annual_kwh * days / 365`.
    pub fn generate(&mut self) -> Vec<f32> {
        let total = self.config.total_steps();
        let spd = self.config.steps_per_day;

        let mut raw = Vec::with_capacity(total);
        for t in 0..total {
            let day_pos = (t % spd) as f32 / spd as f32;
            let angle = 2.0 * std::f32::consts::PI * day_pos + self.phase_rad;
            let shape = 1.0 + self.amp_frac * angle.sin() + gaussian_noise(&mut self.rng, self.noise_std);
            raw.push(shape.max(0.0));
        }

        let target_kwh = self.annual_kwh * self.config.days as f32 / 365.0;
        let raw_sum: f32 = raw.iter().sum();
        if raw_sum <= 0.0 || target_kwh <= 0.0 {
            return vec![0.0; total];
        }

        let scale = target_kwh / raw_sum;
        for v in &mut raw {
            *v *= scale;
        }
        raw
    }
}
