//! The consumer side of the injection: a car that borrows whatever fuel
//! provider it was built with and never knows which variant that is.

use crate::domain::model::CAR_NEEDS_GASOLINE;
use crate::domain::ports::FuelProvider;
use crate::utils::error::Result;
use crate::utils::validation::require_service;
use std::io::Write;

pub struct Car<'a> {
    provider: &'a dyn FuelProvider,
}

impl<'a> Car<'a> {
    /// Binds a car to a provider that is known to be present.
    pub fn new(provider: &'a dyn FuelProvider) -> Self {
        tracing::debug!("🚗 car constructed with injected fuel provider");
        Self { provider }
    }

    /// Binds a car to an optional provider, failing with
    /// [`FuelError::InvalidArgument`](crate::FuelError::InvalidArgument) when it is absent.
    pub fn try_new(provider: Option<&'a dyn FuelProvider>) -> Result<Self> {
        let provider = require_service("provider", provider)?;
        Ok(Self::new(provider))
    }

    pub fn get_gasoline(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", CAR_NEEDS_GASOLINE)?;
        tracing::debug!("delegating to fuel provider");
        self.provider.fuel_up(out)
    }

}

impl std::fmt::Debug for Car<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Car").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{CanProvider, StationProvider};
    use std::cell::Cell;

    struct CountingProvider {
        calls: Cell<usize>,
    }

    impl CountingProvider {
        fn new() -> Self {
            Self {
                calls: Cell::new(0),
            }
        }
    }

    impl FuelProvider for CountingProvider {
        fn fuel_up(&self, out: &mut dyn Write) -> Result<()> {
            self.calls.set(self.calls.get() + 1);
            writeln!(out, "counted")?;
            Ok(())
        }
    }

    fn output_of(car: &Car<'_>) -> String {
        let mut out = Vec::new();
        car.get_gasoline(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_station_car_output() {
        let station = StationProvider::new();
        let car = Car::new(&station);
        assert_eq!(
            output_of(&car),
            "Car needs more gasoline!\nPumping gas at gas station\n"
        );
    }

    #[test]
    fn test_can_car_output() {
        let can = CanProvider::new();
        let car = Car::new(&can);
        assert_eq!(
            output_of(&car),
            "Car needs more gasoline!\nPumping gas from fuel can\n"
        );
    }

    #[test]
    fn test_try_new_with_provider() {
        let station = StationProvider::new();
        let car = Car::try_new(Some(&station)).unwrap();
        assert!(output_of(&car).ends_with("Pumping gas at gas station\n"));
    }

    #[test]
    fn test_try_new_without_provider_fails() {
        let result = Car::try_new(None);
        let err = result.unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "Invalid argument: Service must not be null");
    }

    #[test]
    fn test_get_gasoline_delegates_once_per_call() {
        let provider = CountingProvider::new();
        let car = Car::new(&provider);

        let mut out = Vec::new();
        for _ in 0..3 {
            car.get_gasoline(&mut out).unwrap();
        }

        assert_eq!(provider.calls.get(), 3);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Car needs more gasoline!\ncounted\n".repeat(3)
        );
    }

    #[test]
    fn test_first_line_independent_of_provider() {
        let station = StationProvider::new();
        let can = CanProvider::new();
        let a = output_of(&Car::new(&station));
        let b = output_of(&Car::new(&can));

        assert_eq!(a.lines().next(), b.lines().next());
        assert_ne!(a.lines().nth(1), b.lines().nth(1));
    }
}
