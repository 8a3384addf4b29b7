//! Entity definitions shared by the service and HTTP layers.

pub mod car;

pub use car::Car;
