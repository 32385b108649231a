//! Energy-based home battery model.

/// A home battery that stores surplus solar energy and covers deficits.
///
/// `Battery` tracks its state of charge (SOC) as a fraction of capacity and
/// applies charge/discharge efficiencies per interval. All quantities are
/// per-interval energies in kWh; the model is agnostic to interval duration.
///
/// Energy below `min_soc * capacity_kwh` is considered unusable and is never
/// delivered to the load.
#[derive(Debug, Clone)]
pub struct Battery {
    /// Battery capacity in kilowatt-hours.
    pub capacity_kwh: f32,

    /// State of charge as a fraction of capacity (`min_soc` to 1.0).
    pub soc: f32,

    /// Charging efficiency (0..1.0].
    pub eta_charge: f32,

    /// Discharging efficiency (0..1.0].
    pub eta_discharge: f32,

    /// SOC floor below which stored energy is unusable.
    pub min_soc: f32,
}

impl Battery {
    /// Creates a new battery with the specified parameters.
    ///
    /// # Arguments
    ///
    /// * `capacity_kwh` - Battery capacity in kWh (must be > 0)
    /// * `initial_soc` - Initial state of charge (`min_soc` to 1.0)
    /// * `eta_charge` - Charging efficiency (0..1.0]
    /// * `eta_discharge` - Discharging efficiency (0..1.0]
    /// * `min_soc` - Unusable-energy SOC floor (0.0 to < 1.0)
    ///
    /// # Panics
    ///
    /// Panics if capacity is zero/negative, efficiencies are outside (0, 1],
    /// or the SOC values are out of range. Scenario-level validation in
    /// [`crate::config::ScenarioConfig::validate`] rejects these before a run
    /// is constructed.
    pub fn new(
        capacity_kwh: f32,
        initial_soc: f32,
        eta_charge: f32,
        eta_discharge: f32,
        min_soc: f32,
    ) -> Self {
        assert!(capacity_kwh > 0.0);
        assert!(eta_charge > 0.0 && eta_charge <= 1.0);
        assert!(eta_discharge > 0.0 && eta_discharge <= 1.0);
        assert!((0.0..1.0).contains(&min_soc));
        assert!(initial_soc >= min_soc && initial_soc <= 1.0);

        Self {
            capacity_kwh,
            soc: initial_soc,
            eta_charge,
            eta_discharge,
            min_soc,
        }
    }

    /// Charges the battery with surplus energy and returns what was stored.
    ///
    /// Charge efficiency is applied first, then the result is capped by the
    /// remaining headroom `(1 - soc) * capacity`. Energy that does not fit is
    /// left to the caller (it ends up exported, not stored).
    pub fn charge(&mut self, energy_kwh: f32) -> f32 {
        let effective = energy_kwh * self.eta_charge;
        let headroom = (1.0 - self.soc) * self.capacity_kwh;
        let stored = effective.min(headroom);

        self.soc += stored / self.capacity_kwh;
        self.soc = self.soc.min(1.0);
        debug_assert!(self.soc >= self.min_soc && self.soc <= 1.0);

        stored
    }

    /// Discharges toward a demand and returns the energy delivered at the load.
    ///
    /// To deliver `energy_kwh` at the load, `energy_kwh / eta_discharge` must
    /// leave storage. If the usable energy above `min_soc` covers that, the
    /// request is satisfied exactly. Otherwise the battery is drained to
    /// `min_soc` and delivers whatever the remaining usable energy converts
    /// to after losses. The asymmetry is deliberate: a satisfied request is
    /// returned as-is, a partial one is efficiency-scaled.
    pub fn discharge(&mut self, energy_kwh: f32) -> f32 {
        let required = energy_kwh / self.eta_discharge;
        let usable = ((self.soc - self.min_soc) * self.capacity_kwh).max(0.0);

        let delivered = if usable >= required {
            self.soc -= required / self.capacity_kwh;
            self.soc = self.soc.max(self.min_soc);
            energy_kwh
        } else {
            self.soc = self.min_soc;
            usable * self.eta_discharge
        };
        debug_assert!(self.soc >= self.min_soc && self.soc <= 1.0);

        delivered
    }

    /// Absolute stored energy in kWh (including the unusable floor).
    pub fn energy_available(&self) -> f32 {
        self.soc * self.capacity_kwh
    }
}
