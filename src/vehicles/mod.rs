//! vehicles
//!
//! Abstract-factory demo domain: vehicles and the regional factories that
//! build them.
//!
//! Independent of the library domain in [`crate::core`]; the two demos
//! share no code.

pub mod factory;
pub mod types;

pub use factory::{factory_for, EuVehicleFactory, UsVehicleFactory, VehicleFactory};
pub use types::{Car, Motorcycle, RegionSpec, Vehicle};
