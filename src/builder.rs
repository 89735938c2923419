//! The chained car builder.
//!
//! [`CarBuilder`] wraps a single [`Car`](crate::Car) for its whole lifetime. Setters
//! return `&mut Self` so calls chain, and [`CarBuilder::finalize`] hands out a
//! [`SharedCar`] pointing at that same car. There is no finalized state: setters
//! keep working after `finalize`, and their writes are visible through every handle
//! already returned.

use crate::car::SharedCar;
use crate::step::{AssemblyStep, Part};
use tracing::{debug, trace};

/// Assembles one car step by step.
#[derive(Debug)]
pub struct CarBuilder {
    car: SharedCar,
}

impl Default for CarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CarBuilder {
    /// Creates a builder around a fresh car with every slot unset.
    pub fn new() -> Self {
        Self {
            car: SharedCar::new(),
        }
    }

    /// Sets the engine slot. Any string is accepted, including an empty one.
    pub fn set_engine(&mut self, engine: impl Into<String>) -> &mut Self {
        self.install(Part::Engine, engine.into())
    }

    /// Sets the wheels slot.
    pub fn set_wheels(&mut self, wheels: impl Into<String>) -> &mut Self {
        self.install(Part::Wheels, wheels.into())
    }

    /// Sets the body slot.
    pub fn set_body(&mut self, body: impl Into<String>) -> &mut Self {
        self.install(Part::Body, body.into())
    }

    /// Replays one recorded step through the matching setter.
    pub fn apply(&mut self, step: &AssemblyStep) -> &mut Self {
        match step {
            AssemblyStep::Engine(engine) => self.set_engine(engine.as_str()),
            AssemblyStep::Wheels(wheels) => self.set_wheels(wheels.as_str()),
            AssemblyStep::Body(body) => self.set_body(body.as_str()),
        }
    }

    /// Replays `steps` in order.
    pub fn apply_all<'a>(
        &mut self,
        steps: impl IntoIterator<Item = &'a AssemblyStep>,
    ) -> &mut Self {
        for step in steps {
            self.apply(step);
        }
        self
    }

    /// Returns a handle to the car as it stands, complete or not.
    ///
    /// The car is neither reset nor copied. Calling `finalize` twice on the same builder
    /// yields two handles to one car; see [`SharedCar::snapshot`] for a detached copy.
    pub fn finalize(&self) -> SharedCar {
        debug!(car = %self.car, "finalized car");
        self.car.clone()
    }

    fn install(&mut self, part: Part, value: String) -> &mut Self {
        trace!(%part, value = %value, "installing part");
        self.car.update(|car| {
            let slot = match part {
                Part::Engine => &mut car.engine,
                Part::Wheels => &mut car.wheels,
                Part::Body => &mut car.body,
            };
            *slot = Some(value);
        });
        self
    }
}
