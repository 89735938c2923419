//! Director that runs preset recipes against a caller-supplied [`CarBuilder`].
//!
//! The entry point is [`CarDirector`]. Pick a [`Preset`] (or parse one from its name)
//! and call [`CarDirector::construct`], or use the named shortcuts
//! [`CarDirector::build_sport_configuration`] and
//! [`CarDirector::build_suv_configuration`]. The director keeps nothing between calls:
//! the builder, and therefore the car, stay with the caller.

use crate::builder::CarBuilder;
use crate::car::SharedCar;
use crate::step::Recipe;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Named recipes the director knows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Preset {
    /// Ferrari body, V8 engine, Michelin wheels.
    Sport,
    /// Tesla body, electric engine, Michelin wheels.
    Suv,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Sport, Preset::Suv];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Sport => "sport",
            Preset::Suv => "suv",
        }
    }

    /// The steps this preset runs, in order.
    pub fn recipe(self) -> Recipe {
        match self {
            Preset::Sport => Recipe::sport(),
            Preset::Suv => Recipe::suv(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Returned when a preset name matches none of [`Preset::ALL`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParsePresetError {
    #[error("unknown preset `{name}` (expected one of: sport, suv)")]
    Unknown { name: String },
}

impl FromStr for Preset {
    type Err = ParsePresetError;

    /// Matches preset names case-insensitively, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParsePresetError::Unknown {
                name: wanted.to_string(),
            })
    }
}

/// Runs fixed assembly recipes. Holds no state.
#[derive(Clone, Copy, Debug, Default)]
pub struct CarDirector;

impl CarDirector {
    pub fn new() -> Self {
        Self
    }

    /// Replays `preset`'s recipe on `builder`, then finalizes it.
    ///
    /// Slots the recipe does not touch keep whatever the builder already held, and
    /// the returned handle aliases any car previously finalized from `builder`.
    pub fn construct(&self, preset: Preset, builder: &mut CarBuilder) -> SharedCar {
        let recipe = preset.recipe();
        debug!(%preset, steps = recipe.steps.len(), "running recipe");
        builder.apply_all(&recipe.steps).finalize()
    }

    /// Body "Ferrari", engine "V8", wheels "Michelin", then finalize.
    pub fn build_sport_configuration(&self, builder: &mut CarBuilder) -> SharedCar {
        self.construct(Preset::Sport, builder)
    }

    /// Body "Tesla", engine "Electric", wheels "Michelin", then finalize.
    pub fn build_suv_configuration(&self, builder: &mut CarBuilder) -> SharedCar {
        self.construct(Preset::Suv, builder)
    }
}
