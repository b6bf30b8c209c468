pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{CanProvider, StationProvider};
pub use config::CliConfig;
pub use crate::core::{car::Car, demo::run_demo};
pub use domain::ports::FuelProvider;
pub use utils::error::{FuelError, Result};
