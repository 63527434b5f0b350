//! Houseplant simulation logic.
//!
//! Plants lose moisture and drift in soil pH every tick, and take damage
//! while moisture sits outside a ±10% band around its optimum. A [`Planter`]
//! batches ticks across several plants and sorts them into living and dead.
//!
//! Nothing here prints or reads global state: randomness comes in through a
//! [`UniformSource`] handle and dates through a [`Calendar`], so every run is
//! reproducible from its seed.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`calendar`] | Date source for watering timestamps |
//! | [`plant`] | Per-plant state and the per-tick update rule |
//! | [`planter`] | Ordered plant collection, batch tick, dead/live filters |
//! | [`random`] | Uniform draws, seeded generator |
//! | [`scenario`] | JSON-loadable run configuration |
//! | [`simulation`] | Run loop: tick, water, stop on first death |
//!
//! # Example
//!
//! ```rust
//! use planter_logic::prelude::*;
//!
//! let mut sim = Simulation::new(&Scenario::default(), SystemCalendar);
//! let summary = sim.run();
//! assert_eq!(summary.dead, vec!["cactus".to_string()]);
//! ```

pub mod calendar;
pub mod plant;
pub mod planter;
pub mod random;
pub mod scenario;
pub mod simulation;

pub use calendar::{Calendar, FixedCalendar, SystemCalendar};
pub use plant::{Plant, PlantStatus};
pub use planter::{PlantId, Planter};
pub use random::UniformSource;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::calendar::{Calendar, FixedCalendar, SystemCalendar};
    pub use crate::plant::{Plant, PlantStatus};
    pub use crate::planter::{PlantId, Planter};
    pub use crate::random::{seeded, UniformSource, DEFAULT_SEED};
    pub use crate::scenario::{PlantSpec, Scenario, ScenarioError};
    pub use crate::simulation::{RunSummary, Simulation};
}
