use crate::domain::model::{CAN_FUEL_UP, STATION_FUEL_UP};
use crate::domain::ports::FuelProvider;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default)]
pub struct StationProvider;

impl StationProvider {
    pub fn new() -> Self {
        Self
    }
}

impl FuelProvider for StationProvider {
    fn fuel_up(&self, out: &mut dyn Write) -> Result<()> {
        tracing::debug!("⛽ station provider delivering fuel");
        writeln!(out, "{}", STATION_FUEL_UP)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CanProvider;

impl CanProvider {
    pub fn new() -> Self {
        Self
    }
}

impl FuelProvider for CanProvider {
    fn fuel_up(&self, out: &mut dyn Write) -> Result<()> {
        tracing::debug!("🛢️ can provider delivering fuel");
        writeln!(out, "{}", CAN_FUEL_UP)?;
        Ok(())
    }
}
