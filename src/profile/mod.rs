//! Synthetic input-series generators for runs without prepared data.

/// Seeded household demand profile scaled to an annual energy.
pub mod demand;
/// Seeded solar generation profile.
pub mod solar;

pub use demand::DemandProfile;
pub use solar::SolarProfile;

use rand::{Rng, rngs::StdRng};

/// Gaussian noise via the Box-Muller transform (mean 0, given std dev).
pub(crate) fn gaussian_noise(rng: &mut StdRng, std_dev: f32) -> f32 {
    if std_dev <= 0.0 {
        return 0.0;
    }

    let u1: f32 = rng.random::<f32>().clamp(1e-6, 1.0);
    let u2: f32 = rng.random::<f32>();
    let z0 = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f32::consts::PI * u2).cos();
    z0 * std_dev
}

/// Half-sine daylight fraction for interval `t`, zero outside
/// `[sunrise_idx, sunset_idx)` within the day.
pub(crate) fn daylight_frac(
    t: usize,
    steps_per_day: usize,
    sunrise_idx: usize,
    sunset_idx: usize,
) -> f32 {
    let day_idx = t % steps_per_day;
    if day_idx < sunrise_idx || day_idx >= sunset_idx {
        return 0.0;
    }
    let span = (sunset_idx - sunrise_idx) as f32;
    let pos = (day_idx - sunrise_idx) as f32 / span;
    (std::f32::consts::PI * pos).sin().max(0.0)
}
