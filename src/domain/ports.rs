use crate::utils::error::Result;
use std::io::Write;

/// A source of gasoline that a [`Car`](crate::core::car::Car) can be bound to.
///
/// Implementations write one line describing how fuel was delivered. The only
/// failure is the sink itself failing to accept the line.
pub trait FuelProvider {
    fn fuel_up(&self, out: &mut dyn Write) -> Result<()>;
}
