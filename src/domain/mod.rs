// Domain layer: the fuel capability and the fixed messages. Concrete providers live in adapters.

pub mod model;
pub mod ports;
