//! # car-builder
//!
//! Assembles a [`Car`] one part at a time through a chained [`CarBuilder`], optionally
//! driven by a [`CarDirector`] that replays fixed [`Recipe`]s.
//!
//! A builder owns exactly one car for its whole lifetime. [`CarBuilder::finalize`] hands
//! out a [`SharedCar`] handle to that same car rather than a copy, so every car finalized
//! from one builder aliases the same state. Build each independent car from a fresh builder,
//! or take a [`SharedCar::snapshot`] when a detached copy is needed.
//!
//! ```
//! use car_builder::{CarBuilder, CarDirector};
//!
//! let porsche = CarBuilder::new()
//!     .set_body("Porsche")
//!     .set_engine("V6")
//!     .set_wheels("Continental")
//!     .finalize();
//! assert_eq!(porsche.body().as_deref(), Some("Porsche"));
//!
//! let ferrari = CarDirector::new().build_sport_configuration(&mut CarBuilder::new());
//! assert_eq!(ferrari.engine().as_deref(), Some("V8"));
//! ```

pub mod builder;
pub mod car;
pub mod director;
pub mod step;

pub use builder::*;
pub use car::*;
pub use director::*;
pub use step::*;
