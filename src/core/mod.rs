pub mod car;
pub mod demo;
