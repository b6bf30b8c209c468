use crate::adapters::{CanProvider, StationProvider};
use crate::core::car::Car;
use crate::utils::error::Result;
use std::io::Write;

/// Runs the fixed demonstration: one car per provider variant, station first.
pub fn run_demo(out: &mut dyn Write) -> Result<()> {
    tracing::info!("Starting fuel injection demo");

    let station = StationProvider::new();
    let can = CanProvider::new();

    // racecar is bound to the gas station
    let racecar = Car::new(&station);
    tracing::debug!(car = "racecar", "getting gasoline");
    racecar.get_gasoline(out)?;

    // dune buggy is bound to the fuel can
    let dune_buggy = Car::new(&can);
    tracing::debug!(car = "dune buggy", "getting gasoline");
    dune_buggy.get_gasoline(out)?;

    out.flush()?;
    tracing::info!("✅ Demo completed");
    Ok(())
}
