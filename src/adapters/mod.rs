// Adapters layer: concrete fuel providers that can be injected into a car.

pub mod providers;

pub use providers::{CanProvider, StationProvider};
