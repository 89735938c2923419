//! Assembly steps and the recipes built from them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The slots a car is assembled from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Part {
    Engine,
    Wheels,
    Body,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Part::Engine => "engine",
            Part::Wheels => "wheels",
            Part::Body => "body",
        })
    }
}

/// One recorded setter call, replayed against a builder by
/// [`CarBuilder::apply`](crate::CarBuilder::apply).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssemblyStep {
    /// Install an engine (`set_engine`).
    Engine(String),
    /// Mount wheels (`set_wheels`).
    Wheels(String),
    /// Fit a body (`set_body`).
    Body(String),
}

impl AssemblyStep {
    /// The slot this step writes.
    pub fn part(&self) -> Part {
        match self {
            Self::Engine(_) => Part::Engine,
            Self::Wheels(_) => Part::Wheels,
            Self::Body(_) => Part::Body,
        }
    }

    /// The part name this step installs.
    pub fn value(&self) -> &str {
        match self {
            Self::Engine(v) | Self::Wheels(v) | Self::Body(v) => v,
        }
    }
}

/// An ordered list of assembly steps.
///
/// Steps run in order, so a later step for the same [`Part`] overwrites an earlier one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub steps: Vec<AssemblyStep>,
}

impl Recipe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step (builder pattern).
    pub fn with_step(mut self, step: AssemblyStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Body "Ferrari", engine "V8", wheels "Michelin", in that order.
    pub fn sport() -> Self {
        Self::new()
            .with_step(AssemblyStep::Body("Ferrari".into()))
            .with_step(AssemblyStep::Engine("V8".into()))
            .with_step(AssemblyStep::Wheels("Michelin".into()))
    }

    /// Body "Tesla", engine "Electric", wheels "Michelin", in that order.
    pub fn suv() -> Self {
        Self::new()
            .with_step(AssemblyStep::Body("Tesla".into()))
            .with_step(AssemblyStep::Engine("Electric".into()))
            .with_step(AssemblyStep::Wheels("Michelin".into()))
    }
}
