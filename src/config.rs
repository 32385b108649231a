//! TOML-based scenario configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Top-level scenario configuration parsed from TOML.
///
/// All fields have defaults matching the baseline scenario. Load from TOML
/// with [`ScenarioConfig::from_toml_file`] or use
/// [`ScenarioConfig::baseline`] for the built-in default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Simulation timing, pricing, and seed.
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Synthetic demand profile parameters.
    #[serde(default)]
    pub demand: DemandConfig,
    /// Synthetic solar profile parameters.
    #[serde(default)]
    pub solar: SolarConfig,
    /// Battery parameters.
    #[serde(default)]
    pub battery: BatteryConfig,
}

/// Simulation timing, pricing, and seed.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Number of intervals per simulated day (must be > 0).
    pub steps_per_day: usize,
    /// Number of days to simulate (must be > 0).
    pub days: usize,
    /// Master random seed for profile generation.
    pub seed: u64,
    /// Grid price per kWh used to value avoided imports.
    pub price_per_kwh: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            steps_per_day: 96,
            days: 365,
            seed: 42,
            price_per_kwh: 0.35,
        }
    }
}

/// Synthetic demand profile parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemandConfig {
    /// Annual household consumption the profile is scaled to (kWh).
    pub annual_kwh: f32,
    /// Relative amplitude of the daily sinusoid.
    pub amp_frac: f32,
    /// Phase offset (radians).
    pub phase_rad: f32,
    /// Relative Gaussian noise standard deviation.
    pub noise_std: f32,
}

impl Default for DemandConfig {
    fn default() -> Self {
        Self {
            annual_kwh: 3000.0,
            amp_frac: 0.6,
            phase_rad: 1.2,
            noise_std: 0.05,
        }
    }
}

/// Synthetic solar profile parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolarConfig {
    /// Peak generation (kW).
    pub kw_peak: f32,
    /// Sunrise interval index (inclusive).
    pub sunrise_idx: usize,
    /// Sunset interval index (exclusive).
    pub sunset_idx: usize,
    /// Relative noise standard deviation.
    pub noise_std: f32,
}

impl Default for SolarConfig {
    fn default() -> Self {
        Self {
            kw_peak: 5.0,
            sunrise_idx: 28,
            sunset_idx: 76,
            noise_std: 0.05,
        }
    }
}

/// Battery parameters. Zero capacity selects the no-battery pass-through mode.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatteryConfig {
    /// Total energy capacity (kWh); 0.0 disables the battery.
    pub capacity_kwh: f32,
    /// Charge efficiency (0.0–1.0].
    pub eta_charge: f32,
    /// Discharge efficiency (0.0–1.0].
    pub eta_discharge: f32,
    /// Initial state of charge (`min_soc`–1.0).
    pub initial_soc: f32,
    /// Unusable-energy SOC floor (0.0 to < 1.0).
    pub min_soc: f32,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            capacity_kwh: 8.0,
            eta_charge: 0.9,
            eta_discharge: 0.9,
            initial_soc: 0.05,
            min_soc: 0.05,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"battery.eta_charge"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl ScenarioConfig {
    /// Returns the baseline scenario: a 5 kWp roof with an 8 kWh battery.
    pub fn baseline() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            demand: DemandConfig::default(),
            solar: SolarConfig::default(),
            battery: BatteryConfig::default(),
        }
    }

    /// Returns the no-battery preset: the same installation without storage.
    pub fn no_battery() -> Self {
        Self {
            battery: BatteryConfig {
                capacity_kwh: 0.0,
                ..BatteryConfig::default()
            },
            ..Self::baseline()
        }
    }

    /// Returns the high-solar preset: oversized PV with a larger battery.
    pub fn high_solar() -> Self {
        Self {
            solar: SolarConfig {
                kw_peak: 12.0,
                sunrise_idx: 24,
                sunset_idx: 80,
                ..SolarConfig::default()
            },
            battery: BatteryConfig {
                capacity_kwh: 15.0,
                ..BatteryConfig::default()
            },
            ..Self::baseline()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "no_battery", "high_solar"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "no_battery" => Ok(Self::no_battery()),
            "high_solar" => Ok(Self::high_solar()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// A run must not be constructed while this is non-empty; there is no
    /// partial-run recovery.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let s = &self.simulation;

        if s.steps_per_day == 0 {
            errors.push(ConfigError {
                field: "simulation.steps_per_day".into(),
                message: "must be > 0".into(),
            });
        }
        if s.days == 0 {
            errors.push(ConfigError {
                field: "simulation.days".into(),
                message: "must be > 0".into(),
            });
        }
        if s.price_per_kwh < 0.0 {
            errors.push(ConfigError {
                field: "simulation.price_per_kwh".into(),
                message: "must be >= 0".into(),
            });
        }

        let d = &self.demand;
        if d.annual_kwh < 0.0 {
            errors.push(ConfigError {
                field: "demand.annual_kwh".into(),
                message: "must be >= 0".into(),
            });
        }
        if d.amp_frac < 0.0 {
            errors.push(ConfigError {
                field: "demand.amp_frac".into(),
                message: "must be >= 0".into(),
            });
        }

        let sol = &self.solar;
        if sol.kw_peak < 0.0 {
            errors.push(ConfigError {
                field: "solar.kw_peak".into(),
                message: "must be >= 0".into(),
            });
        }
        if sol.sunrise_idx >= sol.sunset_idx {
            errors.push(ConfigError {
                field: "solar.sunrise_idx".into(),
                message: "must be < solar.sunset_idx".into(),
            });
        }
        if s.steps_per_day > 0 && sol.sunset_idx > s.steps_per_day {
            errors.push(ConfigError {
                field: "solar.sunset_idx".into(),
                message: "must be <= simulation.steps_per_day".into(),
            });
        }

        let bat = &self.battery;
        if bat.capacity_kwh < 0.0 {
            errors.push(ConfigError {
                field: "battery.capacity_kwh".into(),
                message: "must be >= 0 (0 disables the battery)".into(),
            });
        }
        if !(bat.eta_charge > 0.0 && bat.eta_charge <= 1.0) {
            errors.push(ConfigError {
                field: "battery.eta_charge".into(),
                message: "must be in (0.0, 1.0]".into(),
            });
        }
        if !(bat.eta_discharge > 0.0 && bat.eta_discharge <= 1.0) {
            errors.push(ConfigError {
                field: "battery.eta_discharge".into(),
                message: "must be in (0.0, 1.0]".into(),
            });
        }
        if !(0.0..1.0).contains(&bat.min_soc) {
            errors.push(ConfigError {
                field: "battery.min_soc".into(),
                message: "must be in [0.0, 1.0)".into(),
            });
        }
        if bat.initial_soc < bat.min_soc || bat.initial_soc > 1.0 {
            errors.push(ConfigError {
                field: "battery.initial_soc".into(),
                message: "must be in [battery.min_soc, 1.0]".into(),
            });
        }

        errors
    }
}
