//! Post-hoc summary aggregation from flow records.

use std::fmt;

use super::types::FlowRecord;

/// Annual summary totals derived from a complete simulation run.
///
/// A pure column-wise reduction over `Vec<FlowRecord>`, computed post-hoc so
/// the reported totals always match the record series. Plain sequential
/// summation is sufficient at the expected scale (35,040 quarter-hour
/// intervals per year).
#[derive(Debug, Clone)]
pub struct SummaryReport {
    /// Total household demand (kWh).
    pub demand_kwh: f32,
    /// Total solar generation (kWh).
    pub solar_kwh: f32,
    /// Solar energy consumed directly by the load (kWh).
    pub consumed_from_solar_kwh: f32,
    /// Energy stored into the battery (kWh, post-efficiency).
    pub battery_charge_kwh: f32,
    /// Energy delivered from the battery to the load (kWh).
    pub battery_discharge_kwh: f32,
    /// Energy imported from the grid (kWh).
    pub grid_import_kwh: f32,
    /// Total savings versus importing everything.
    pub savings: f32,
}

impl SummaryReport {
    /// Sums all seven totals from the complete record series.
    pub fn from_records(records: &[FlowRecord]) -> Self {
        let mut demand = 0.0_f32;
        let mut solar = 0.0_f32;
        let mut consumed = 0.0_f32;
        let mut charge = 0.0_f32;
        let mut discharge = 0.0_f32;
        let mut import = 0.0_f32;
        let mut savings = 0.0_f32;

        for r in records {
            demand += r.load_kwh;
            solar += r.solar_kwh;
            consumed += r.solar_to_consume_kwh;
            charge += r.battery_charge_kwh;
            discharge += r.battery_discharge_kwh;
            import += r.grid_import_kwh;
            savings += r.savings;
        }

        Self {
            demand_kwh: demand,
            solar_kwh: solar,
            consumed_from_solar_kwh: consumed,
            battery_charge_kwh: charge,
            battery_discharge_kwh: discharge,
            grid_import_kwh: import,
            savings,
        }
    }
}

impl fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Annual Summary ---")?;
        writeln!(f, "Demand:               {:.1} kWh", self.demand_kwh)?;
        writeln!(f, "Solar generation:     {:.1} kWh", self.solar_kwh)?;
        writeln!(
            f,
            "Consumed from solar:  {:.1} kWh",
            self.consumed_from_solar_kwh
        )?;
        writeln!(f, "Battery charged:      {:.1} kWh", self.battery_charge_kwh)?;
        writeln!(
            f,
            "Battery discharged:   {:.1} kWh",
            self.battery_discharge_kwh
        )?;
        writeln!(f, "Grid import:          {:.1} kWh", self.grid_import_kwh)?;
        write!(f, "Savings:              {:.2}", self.savings)
    }
}
