//! vehicles::factory
//!
//! Factory selection and creation for regional vehicle variants.
//!
//! # Design
//!
//! `VehicleFactory` is the seam between the demo driver and the regional
//! variants. The driver calls [`factory_for`] instead of constructing a
//! concrete factory, so adding a region never touches the driver. Each
//! factory stamps its fixed region label onto every vehicle it builds.

use super::types::{Car, Motorcycle, RegionSpec};

/// Factory for vehicles of one regional specification.
pub trait VehicleFactory {
    /// The region this factory builds for.
    fn region(&self) -> RegionSpec;

    /// Build a car. No validation of make or model.
    fn create_car(&self, make: &str, model: &str) -> Car;

    /// Build a motorcycle. No validation of make or model.
    fn create_motorcycle(&self, make: &str, model: &str) -> Motorcycle;
}

/// Factory producing US-specification vehicles.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsVehicleFactory;

impl VehicleFactory for UsVehicleFactory {
    fn region(&self) -> RegionSpec {
        RegionSpec::Us
    }

    fn create_car(&self, make: &str, model: &str) -> Car {
        Car::new(make, model, RegionSpec::Us)
    }

    fn create_motorcycle(&self, make: &str, model: &str) -> Motorcycle {
        Motorcycle::new(make, model, RegionSpec::Us)
    }
}

/// Factory producing EU-specification vehicles.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuVehicleFactory;

impl VehicleFactory for EuVehicleFactory {
    fn region(&self) -> RegionSpec {
        RegionSpec::Eu
    }

    fn create_car(&self, make: &str, model: &str) -> Car {
        Car::new(make, model, RegionSpec::Eu)
    }

    fn create_motorcycle(&self, make: &str, model: &str) -> Motorcycle {
        Motorcycle::new(make, model, RegionSpec::Eu)
    }
}

/// Create the factory for a region.
///
/// # Example
///
/// ```
/// use shelfling::vehicles::factory::factory_for;
/// use shelfling::vehicles::types::{RegionSpec, Vehicle};
///
/// let factory = factory_for(RegionSpec::Us);
/// let car = factory.create_car("Ford", "Mustang");
/// assert!(car.start_engine().contains("US Spec"));
/// ```
pub fn factory_for(region: RegionSpec) -> Box<dyn VehicleFactory> {
    match region {
        RegionSpec::Us => Box::new(UsVehicleFactory),
        RegionSpec::Eu => Box::new(EuVehicleFactory),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicles::types::Vehicle;

    #[test]
    fn us_factory_stamps_us_spec() {
        let factory = UsVehicleFactory;
        let car = factory.create_car("Ford", "Mustang");
        assert_eq!(car.region_spec(), RegionSpec::Us);

        let message = car.start_engine();
        assert!(message.contains("Ford"));
        assert!(message.contains("Mustang"));
        assert!(message.contains("US Spec"));
    }

    #[test]
    fn eu_factory_stamps_eu_spec() {
        let factory = EuVehicleFactory;
        let moto = factory.create_motorcycle("Ducati", "Monster");
        assert_eq!(moto.region_spec(), RegionSpec::Eu);

        let message = moto.start_engine();
        assert!(message.contains("Ducati"));
        assert!(message.contains("Monster"));
        assert!(message.contains("EU Spec"));
    }

    #[test]
    fn factory_for_selects_by_region() {
        assert_eq!(factory_for(RegionSpec::Us).region(), RegionSpec::Us);
        assert_eq!(factory_for(RegionSpec::Eu).region(), RegionSpec::Eu);
    }

    #[test]
    fn same_factory_builds_both_kinds() {
        let factory = factory_for(RegionSpec::Eu);
        let car = factory.create_car("Volkswagen", "Golf");
        let moto = factory.create_motorcycle("Ducati", "Monster");
        assert_eq!(car.region_spec(), moto.region_spec());
    }
}
