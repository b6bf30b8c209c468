pub const CAR_NEEDS_GASOLINE: &str = "Car needs more gasoline!";
pub const STATION_FUEL_UP: &str = "Pumping gas at gas station";
pub const CAN_FUEL_UP: &str = "Pumping gas from fuel can";

pub const MISSING_SERVICE: &str = "Service must not be null";
