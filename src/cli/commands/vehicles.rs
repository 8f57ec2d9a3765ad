//! vehicles command - abstract-factory demo
//!
//! Builds one car and one motorcycle per selected regional factory and
//! starts every engine, logging each message. With no region selected the
//! demo runs both factories, US first.

use anyhow::Result;
use tracing::info;

use crate::vehicles::{factory_for, RegionSpec, Vehicle};

use super::Context;

/// Demo fixtures per region: (car make/model, motorcycle make/model).
fn fixtures(region: RegionSpec) -> [(&'static str, &'static str); 2] {
    match region {
        RegionSpec::Us => [("Ford", "Mustang"), ("Harley-Davidson", "Sportster")],
        RegionSpec::Eu => [("Volkswagen", "Golf"), ("Ducati", "Monster")],
    }
}

/// Run the vehicle-factory demo.
///
/// `region` narrows the demo to one factory; otherwise the flag-less
/// default comes from config, and failing that both regions run.
pub fn vehicles(ctx: &Context, region: Option<RegionSpec>) -> Result<()> {
    let regions: Vec<RegionSpec> = match region.or_else(|| ctx.config.vehicle_region()) {
        Some(one) => vec![one],
        None => vec![RegionSpec::Us, RegionSpec::Eu],
    };

    for line in demo_messages(&regions) {
        info!("{}", line);
    }

    Ok(())
}

/// Build the demo vehicles and collect their engine-start messages.
pub fn demo_messages(regions: &[RegionSpec]) -> Vec<String> {
    let mut messages = Vec::new();

    for &region in regions {
        let factory = factory_for(region);
        let [(car_make, car_model), (moto_make, moto_model)] = fixtures(region);

        let car = factory.create_car(car_make, car_model);
        let motorcycle = factory.create_motorcycle(moto_make, moto_model);

        messages.push(car.start_engine());
        messages.push(motorcycle.start_engine());
    }

    messages
}
