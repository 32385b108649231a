//! Residential PV + battery self-consumption simulator.

pub mod battery;
pub mod config;
/// CSV series import/export.
pub mod io;
/// Synthetic demand and solar profile generators.
pub mod profile;
/// Allocation engine, flow records, and summary aggregation.
pub mod sim;
