//! vehicles::types
//!
//! Vehicle data types and the engine-start behavior.
//!
//! # Design
//!
//! Vehicles are value-like and never mutated after construction. The
//! `Vehicle` trait carries the one required behavior, `start_engine`, which
//! returns its human-readable message instead of printing it; the caller
//! decides where the message goes.

use serde::{Deserialize, Serialize};

/// Regulatory variant a factory produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionSpec {
    /// United States specification.
    Us,
    /// European Union specification.
    Eu,
}

impl RegionSpec {
    /// Fixed display label stamped onto vehicles.
    pub fn label(self) -> &'static str {
        match self {
            RegionSpec::Us => "US Spec",
            RegionSpec::Eu => "EU Spec",
        }
    }
}

impl std::fmt::Display for RegionSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A vehicle that can start its engine.
pub trait Vehicle {
    /// Manufacturer name.
    fn make(&self) -> &str;

    /// Model name.
    fn model(&self) -> &str;

    /// Regulatory variant this vehicle was built for.
    fn region_spec(&self) -> RegionSpec;

    /// Start the engine, returning the message to report.
    ///
    /// Cannot fail and has no other observable effect.
    fn start_engine(&self) -> String;
}

/// A car.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    make: String,
    model: String,
    region_spec: RegionSpec,
}

impl Car {
    /// Build a car. No validation; empty strings are accepted.
    pub fn new(make: impl Into<String>, model: impl Into<String>, region_spec: RegionSpec) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            region_spec,
        }
    }
}

impl Vehicle for Car {
    fn make(&self) -> &str {
        &self.make
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn region_spec(&self) -> RegionSpec {
        self.region_spec
    }

    fn start_engine(&self) -> String {
        format!(
            "{} {} ({}): Engine started",
            self.make,
            self.model,
            self.region_spec.label()
        )
    }
}

/// A motorcycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motorcycle {
    make: String,
    model: String,
    region_spec: RegionSpec,
}

impl Motorcycle {
    /// Build a motorcycle. No validation; empty strings are accepted.
    pub fn new(make: impl Into<String>, model: impl Into<String>, region_spec: RegionSpec) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            region_spec,
        }
    }
}

impl Vehicle for Motorcycle {
    fn make(&self) -> &str {
        &self.make
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn region_spec(&self) -> RegionSpec {
        self.region_spec
    }

    fn start_engine(&self) -> String {
        format!(
            "{} {} ({}): Motor revved up",
            self.make,
            self.model,
            self.region_spec.label()
        )
    }
}
